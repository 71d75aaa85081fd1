/// Caller identity as asserted by the upstream identity provider.
///
/// Built only by the id-token decoder; handlers receive it through the
/// auth extractor and never look at raw tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Identity {
    pub(crate) user_id: String,
    pub(crate) display_name: Option<String>,
}
