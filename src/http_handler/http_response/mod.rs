pub(crate) mod response_common;
