use bytes::Bytes;

use crate::error::Error;
use crate::io::ReadBuf;
use crate::protocol::{state_change, Capabilities, Info, Status};
use crate::{Context, IsolationLevel};

/// Shared result of the common zero/zero write, so the hot path returns
/// without allocating.
static BASIC_OK: OkPacket = OkPacket { affected_rows: 0, last_insert_id: 0, info: Bytes::new() };

/// Generic success response.
///
/// Besides the row counts, an OK packet refreshes the server status and
/// warning count on the [`Context`] and may carry a stream of
/// session-state-change records when [`Capabilities::SESSION_TRACK`] was
/// negotiated.
///
/// <https://mariadb.com/kb/en/ok_packet/>
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OkPacket {
    pub affected_rows: u64,
    pub last_insert_id: u64,

    /// Human-readable status text; empty unless decoded through
    /// [`parse_with_info`][OkPacket::parse_with_info].
    pub info: Bytes,
}

/// Context mutations staged while the payload is parsed, applied only
/// once the whole packet has decoded cleanly.
#[derive(Default)]
struct SessionDelta {
    charset: Option<String>,
    thread_id: Option<u64>,
    threads_connected: Option<u64>,
    auto_increment_increment: Option<u64>,
    redirect_url: Option<String>,
    // outer None = untouched; inner None = explicitly unknown/absent
    transaction_isolation: Option<Option<IsolationLevel>>,
    database: Option<Option<String>>,
    catalog: Option<Option<String>>,
}

impl SessionDelta {
    fn apply(self, context: &mut Context) {
        if let Some(charset) = self.charset {
            context.set_charset(charset);
        }
        if let Some(thread_id) = self.thread_id {
            context.set_thread_id(thread_id);
        }
        if let Some(threads_connected) = self.threads_connected {
            context.set_threads_connected(threads_connected);
        }
        if let Some(increment) = self.auto_increment_increment {
            context.set_auto_increment_increment(increment);
        }
        if let Some(url) = self.redirect_url {
            context.set_redirect_url(Some(url));
        }
        if let Some(level) = self.transaction_isolation {
            context.set_transaction_isolation(level);
        }
        if let Some(database) = self.database {
            context.set_database(database);
        }
        if let Some(catalog) = self.catalog {
            context.set_catalog(catalog);
        }
    }
}

impl OkPacket {
    /// Decode an OK payload, discarding the info text.
    pub fn parse(buf: &mut ReadBuf, context: &mut Context) -> Result<Self, Error> {
        Self::parse_inner(buf, context, false)
    }

    /// Decode an OK payload, retaining the info text.
    pub fn parse_with_info(buf: &mut ReadBuf, context: &mut Context) -> Result<Self, Error> {
        Self::parse_inner(buf, context, true)
    }

    fn parse_inner(buf: &mut ReadBuf, context: &mut Context, keep_info: bool) -> Result<Self, Error> {
        buf.skip(1)?; // ok header

        let affected_rows = buf.get_uint_lenenc_not_null()?;
        let last_insert_id = buf.get_uint_lenenc_not_null()?;
        let status = Status::from_bits_truncate(buf.get_u16_le()?);
        let warnings = buf.get_u16_le()?;

        let mut info = Bytes::new();
        let mut delta = SessionDelta::default();

        if buf.readable_bytes() > 0 {
            let info_len = buf.get_uint_lenenc_not_null()?;
            let info_len = usize::try_from(info_len)
                .map_err(|_| err_protocol!("info length overflows usize: {info_len}"))?;

            if keep_info {
                info = buf.get_bytes(info_len)?;
            } else {
                buf.skip(info_len)?;
            }

            if context.has_client_capability(Capabilities::SESSION_TRACK) {
                while buf.readable_bytes() > 0 {
                    let mut session_buf = buf.get_length_buf()?;

                    while session_buf.readable_bytes() > 0 {
                        match session_buf.get_u8()? {
                            state_change::SYSTEM_VARIABLES => {
                                loop {
                                    let mut record = session_buf.get_length_buf()?;
                                    read_system_variable(&mut record, &mut delta)?;

                                    if record.readable_bytes() == 0 {
                                        break;
                                    }
                                }
                            }

                            state_change::SCHEMA => {
                                // legacy total-length prefix
                                session_buf.get_uint_lenenc_not_null()?;

                                let database = session_buf
                                    .get_str_lenenc()?
                                    .filter(|name| !name.is_empty());
                                tracing::debug!("schema change: is {:?}", database);
                                delta.database = Some(database);
                            }

                            state_change::CATALOG => {
                                session_buf.get_uint_lenenc_not_null()?;

                                let catalog = session_buf
                                    .get_str_lenenc()?
                                    .filter(|name| !name.is_empty());
                                tracing::debug!("catalog change: is {:?}", catalog);
                                delta.catalog = Some(catalog);
                            }

                            // forward compatibility: every record is
                            // length-prefixed, so unknown tags skip cleanly
                            _ => {
                                let len = session_buf.get_uint_lenenc_not_null()?;
                                let len = usize::try_from(len).map_err(|_| {
                                    err_protocol!("state-change length overflows usize: {len}")
                                })?;
                                session_buf.skip(len)?;
                            }
                        }
                    }
                }
            }
        }

        // the payload decoded in full; now let the context see it
        context.set_server_status(status);
        context.set_warnings(warnings);
        delta.apply(context);

        if affected_rows == 0 && last_insert_id == 0 && info.is_empty() {
            return Ok(BASIC_OK.clone());
        }

        Ok(Self { affected_rows, last_insert_id, info })
    }

    /// Parse the `Records: n  Duplicates: n` style counters out of the
    /// retained info text.
    pub fn status_info(&self) -> Info {
        Info::parse(&String::from_utf8_lossy(&self.info))
    }
}

fn read_system_variable(record: &mut ReadBuf, delta: &mut SessionDelta) -> Result<(), Error> {
    let name_len = record.get_uint_lenenc_not_null()?;
    let name_len = usize::try_from(name_len)
        .map_err(|_| err_protocol!("variable name length overflows usize: {name_len}"))?;

    let name = record.get_str(name_len)?;
    let value = record.get_bytes_lenenc()?;

    tracing::debug!(
        "system variable change: {} = {:?}",
        name,
        value.as_deref().map(String::from_utf8_lossy)
    );

    match name.as_str() {
        "character_set_client" => {
            if let Some(value) = value {
                delta.charset = Some(
                    String::from_utf8(value.to_vec())
                        .map_err(|_| err_protocol!("charset is not valid UTF-8"))?,
                );
            }
        }

        "connection_id" => {
            delta.thread_id = parse_numeric_variable(&name, value);
        }

        // the server reports this one with a capital C
        "threads_Connected" => {
            delta.threads_connected = parse_numeric_variable(&name, value);
        }

        "auto_increment_increment" => {
            delta.auto_increment_increment = parse_numeric_variable(&name, value);
        }

        "redirect_url" => {
            if let Some(value) = value {
                if !value.is_empty() {
                    delta.redirect_url = Some(
                        String::from_utf8(value.to_vec())
                            .map_err(|_| err_protocol!("redirect url is not valid UTF-8"))?,
                    );
                }
            }
        }

        "tx_isolation" | "transaction_isolation" => {
            // a literal outside the known set maps to the explicit
            // unknown state, not a decode failure
            let level = value
                .as_deref()
                .and_then(|value| std::str::from_utf8(value).ok())
                .and_then(IsolationLevel::from_session_value);

            delta.transaction_isolation = Some(level);
        }

        // unrecognized variables are read and dropped
        _ => {}
    }

    Ok(())
}

fn parse_numeric_variable(name: &str, value: Option<Bytes>) -> Option<u64> {
    let value = value?;

    let parsed = atoi::atoi::<u64>(&value);

    if parsed.is_none() {
        log::warn!(
            "ignoring non-numeric value {:?} for session variable {}",
            String::from_utf8_lossy(&value),
            name
        );
    }

    parsed
}
