pub(crate) mod database;
pub(crate) mod id_token;
pub(crate) mod logging;
pub(crate) mod settings;
