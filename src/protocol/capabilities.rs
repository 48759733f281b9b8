// https://mariadb.com/kb/en/connection/#capabilities
// https://dev.mysql.com/doc/dev/mysql-server/latest/group__group__cs__capabilities__flags.html
bitflags::bitflags! {
    /// Capability flags negotiated during the connection handshake.
    ///
    /// The intersection of what the client requested and what the server
    /// offered; stored on the [`Context`][crate::Context] and consulted by
    /// encoders and decoders to gate optional protocol extensions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Capabilities: u64 {
        // improved "old password" authentication; assumed since 4.1
        const LONG_PASSWORD = 0x0000_0001;

        // report matched rows instead of affected rows
        const FOUND_ROWS = 0x0000_0002;

        // longer column flags in metadata
        const LONG_FLAG = 0x0000_0004;

        // default schema can be given in the handshake response
        const CONNECT_WITH_DB = 0x0000_0008;

        // do not permit `database.table.column`
        const NO_SCHEMA = 0x0000_0010;

        // compressed protocol supported
        const COMPRESS = 0x0000_0020;

        // legacy ODBC behavior; no effect since 3.22
        const ODBC = 0x0000_0040;

        // enable LOAD DATA LOCAL INFILE
        const LOCAL_FILES = 0x0000_0080;

        // parser can ignore spaces before '('
        const IGNORE_SPACE = 0x0000_0100;

        // 4.1+ protocol
        const PROTOCOL_41 = 0x0000_0200;

        // interactive client; wait_interactive_timeout applies
        const INTERACTIVE = 0x0000_0400;

        // switch to TLS after the handshake packet
        const SSL = 0x0000_0800;

        // EOF packets carry transaction status flags
        const TRANSACTIONS = 0x0000_2000;

        // 4.1+ native authentication
        const SECURE_CONNECTION = 0x0000_8000;

        // multiple statements per COM_QUERY / COM_STMT_PREPARE
        const MULTI_STATEMENTS = 0x0001_0000;

        // multiple result sets per COM_QUERY
        const MULTI_RESULTS = 0x0002_0000;

        // multiple result sets per COM_STMT_EXECUTE
        const PS_MULTI_RESULTS = 0x0004_0000;

        // authentication plugins
        const PLUGIN_AUTH = 0x0008_0000;

        // connection attributes in the handshake response
        const CONNECT_ATTRS = 0x0010_0000;

        // length-encoded authentication response data
        const PLUGIN_AUTH_LENENC_DATA = 0x0020_0000;

        // client can handle expired passwords
        const CAN_HANDLE_EXPIRED_PASSWORDS = 0x0040_0000;

        // server may embed session-state-change records in OK packets
        const SESSION_TRACK = 0x0080_0000;

        // OK packet is sent where EOF would have been
        const DEPRECATE_EOF = 0x0100_0000;
    }
}
