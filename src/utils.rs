/// First element of a sequence, if any.
pub fn first<T>(items: &[T]) -> Option<&T> {
    items.first()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_of_non_empty() {
        assert_eq!(first(&["en", "fr"]), Some(&"en"));
    }

    #[test]
    fn test_first_of_empty() {
        let empty: [u8; 0] = [];
        assert_eq!(first(&empty), None);
    }
}
