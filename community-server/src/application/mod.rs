pub(crate) mod assembler;
pub(crate) mod comment_service;
pub(crate) mod like_service;
pub(crate) mod post_service;

#[cfg(test)]
mod scenario_tests;
#[cfg(test)]
pub(crate) mod test_support;
