use crate::protocol::{Capabilities, Status};
use crate::IsolationLevel;

/// Per-connection session-state mirror.
///
/// One instance per logical connection, created when the handshake
/// completes and written to by every decoded response for the life of the
/// connection. Access is strictly serialized by the caller: exactly one
/// encode or decode call touches the context at any instant (the protocol
/// is half-duplex). On transparent reconnection a *new* context is built
/// from the new handshake and re-converged by replaying the buffered
/// session-altering commands.
///
/// Unknown or unset optional fields read as `None`, never as a sentinel
/// that could be mistaken for a decoded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    client_capabilities: Capabilities,
    server_status: Status,
    warnings: u16,
    charset: String,
    thread_id: u64,
    threads_connected: u64,
    database: Option<String>,
    catalog: Option<String>,
    auto_increment_increment: u64,
    transaction_isolation: Option<IsolationLevel>,
    redirect_url: Option<String>,
}

impl Context {
    /// Create the state mirror for a freshly established connection with
    /// the negotiated capability set.
    pub fn new(client_capabilities: Capabilities) -> Self {
        Self {
            client_capabilities,
            server_status: Status::empty(),
            warnings: 0,
            charset: String::new(),
            thread_id: 0,
            threads_connected: 0,
            database: None,
            catalog: None,
            auto_increment_increment: 1,
            transaction_isolation: None,
            redirect_url: None,
        }
    }

    pub fn has_client_capability(&self, flag: Capabilities) -> bool {
        self.client_capabilities.contains(flag)
    }

    pub fn client_capabilities(&self) -> Capabilities {
        self.client_capabilities
    }

    pub fn server_status(&self) -> Status {
        self.server_status
    }

    pub fn set_server_status(&mut self, status: Status) {
        self.server_status = status;
    }

    pub fn warnings(&self) -> u16 {
        self.warnings
    }

    pub fn set_warnings(&mut self, warnings: u16) {
        self.warnings = warnings;
    }

    pub fn charset(&self) -> &str {
        &self.charset
    }

    pub fn set_charset(&mut self, charset: String) {
        self.charset = charset;
    }

    pub fn thread_id(&self) -> u64 {
        self.thread_id
    }

    pub fn set_thread_id(&mut self, thread_id: u64) {
        self.thread_id = thread_id;
    }

    pub fn threads_connected(&self) -> u64 {
        self.threads_connected
    }

    pub fn set_threads_connected(&mut self, threads_connected: u64) {
        self.threads_connected = threads_connected;
    }

    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    pub fn set_database(&mut self, database: Option<String>) {
        self.database = database;
    }

    pub fn catalog(&self) -> Option<&str> {
        self.catalog.as_deref()
    }

    pub fn set_catalog(&mut self, catalog: Option<String>) {
        self.catalog = catalog;
    }

    pub fn auto_increment_increment(&self) -> u64 {
        self.auto_increment_increment
    }

    pub fn set_auto_increment_increment(&mut self, increment: u64) {
        self.auto_increment_increment = increment;
    }

    /// `None` when the level is unset *or* when the server reported a
    /// literal outside the four known levels.
    pub fn transaction_isolation(&self) -> Option<IsolationLevel> {
        self.transaction_isolation
    }

    pub fn set_transaction_isolation(&mut self, level: Option<IsolationLevel>) {
        self.transaction_isolation = level;
    }

    pub fn redirect_url(&self) -> Option<&str> {
        self.redirect_url.as_deref()
    }

    pub fn set_redirect_url(&mut self, url: Option<String>) {
        self.redirect_url = url;
    }
}
