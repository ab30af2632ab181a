//! Root page handler.

use crate::config::ROOT_GREETING;

/// Root handler. Serves a fixed plain-text greeting.
pub async fn index() -> &'static str {
    ROOT_GREETING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_greeting() {
        assert_eq!(index().await, "Hello DevOps! Lab 1");
    }
}
