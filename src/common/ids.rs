use uuid::Uuid;

const SHORT_ID_LEN: usize = 8;

/// Short random token used for video and job ids. Collisions are not checked.
pub fn short_id() -> String {
    Uuid::new_v4().as_simple().to_string()[..SHORT_ID_LEN].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_id_is_eight_hex_chars() {
        let id = short_id();
        assert_eq!(id.len(), 8);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
