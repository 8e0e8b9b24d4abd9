use crate::structs::PolicyArgs;

/// Knobs for the parts of unary legality that vary between deployments.
///
/// The defaults forbid stacking a plain unary on another unary node (use a
/// single compound unary instead) and forbid relabeling a node with the
/// label it already carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalityPolicy {
    pub allow_unary_chains: bool,
    pub allow_same_label_unary: bool,
}

impl LegalityPolicy {
    pub fn permissive() -> Self {
        LegalityPolicy {
            allow_unary_chains: true,
            allow_same_label_unary: true,
        }
    }
}

impl From<&PolicyArgs> for LegalityPolicy {
    fn from(args: &PolicyArgs) -> Self {
        LegalityPolicy {
            allow_unary_chains: args.allow_unary_chains,
            allow_same_label_unary: args.allow_same_label_unary,
        }
    }
}
