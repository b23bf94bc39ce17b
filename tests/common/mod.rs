pub mod external_server;
pub mod ovrstat_server;
