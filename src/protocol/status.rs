// https://mariadb.com/kb/en/ok_packet/#server-status-flag
// https://dev.mysql.com/doc/dev/mysql-server/latest/mysql__com_8h.html
bitflags::bitflags! {
    /// Server status bits, refreshed by every OK (and ERR-free EOF) packet.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Status: u16 {
        // a multi-statement transaction is open
        const IN_TRANS = 0x0001;

        // autocommit mode is set
        const AUTOCOMMIT = 0x0002;

        // more results follow this one
        const MORE_RESULTS_EXISTS = 0x0008;

        const NO_GOOD_INDEX_USED = 0x0010;
        const NO_INDEX_USED = 0x0020;

        // an open cursor still has rows (COM_STMT_FETCH)
        const CURSOR_EXISTS = 0x0040;

        // the open cursor is exhausted
        const LAST_ROW_SENT = 0x0080;

        // the current database was dropped
        const DB_DROPPED = 0x0100;

        // escape mode is "no backslash escapes"
        const NO_BACKSLASH_ESCAPES = 0x0200;

        // a DDL change forced an automatic re-prepare
        const METADATA_CHANGED = 0x0400;

        // the statement exceeded long_query_time
        const QUERY_WAS_SLOW = 0x0800;

        // result set carries stored-procedure out parameters
        const PS_OUT_PARAMS = 0x1000;

        // the open transaction is read-only
        const IN_TRANS_READONLY = 0x2000;

        // session state changed; an OK packet carries state-change records
        const SESSION_STATE_CHANGED = 0x4000;
    }
}
