//! Role identifiers for the Eduble access control

use alloy::primitives::{keccak256, B256};

use crate::constants::TEACHER_ROLE_NAME;

/// Identifier of the teacher role, the keccak256 hash of the role name.
///
/// The contract uses the same convention on its side, so the value computed
/// here matches the `TEACHER_ROLE` constant stored on-chain.
pub fn teacher_role() -> B256 {
    keccak256(TEACHER_ROLE_NAME.as_bytes())
}

#[cfg(test)]
#[allow(clippy::missing_docs_in_private_items)]
mod tests {
    use alloy::primitives::b256;

    use super::*;

    #[test]
    fn teacher_role_is_deterministic() {
        assert_eq!(teacher_role(), teacher_role());
    }

    #[test]
    fn teacher_role_matches_known_hash() {
        // keccak256("TEACHER_ROLE")
        assert_eq!(
            teacher_role(),
            b256!("d16e204b8a42a15ab0ea6bb8ec1ecdfbe69f38074fc865323af19efe7d9573d9")
        );
    }

    #[test]
    fn teacher_role_differs_from_other_role_names() {
        assert_ne!(teacher_role(), keccak256(b"STUDENT_ROLE"));
        assert_ne!(teacher_role(), B256::ZERO);
    }
}
