// https://dev.mysql.com/doc/c-api/8.0/en/mysql-info.html
// https://mariadb.com/kb/en/mysql_info/

/// Counters reported in the human-readable info text of an OK packet.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Info {
    pub records: u64,
    pub duplicates: u64,
    pub matched: u64,
}

impl Info {
    pub(crate) fn parse(info: &str) -> Self {
        let mut parsed = Self::default();

        for item in info.split("  ") {
            let Some((key, value)) = item.split_once(": ") else {
                continue;
            };

            let counter = match key {
                "Records" => &mut parsed.records,
                "Duplicates" => &mut parsed.duplicates,
                "Rows matched" => &mut parsed.matched,

                // "Changed" is the affected-rows count for UPDATE and
                // "Warnings" the warning count; both arrive in their
                // own packet fields
                "Changed" | "Warnings" => continue,

                _ => {
                    log::warn!("unrecognized counter {key:?} in OK packet info: {info:?}");
                    continue;
                }
            };

            match value.parse() {
                Ok(value) => *counter = value,
                Err(_) => {
                    log::warn!("malformed counter {key:?} in OK packet info: {info:?}");
                }
            }
        }

        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::Info;

    #[test]
    fn parse_insert() {
        let info = Info::parse("Records: 10  Duplicates: 5  Warnings: 0");

        assert_eq!(info.records, 10);
        assert_eq!(info.duplicates, 5);
    }

    #[test]
    fn parse_update() {
        let info = Info::parse("Rows matched: 40  Changed: 5  Warnings: 0");

        assert_eq!(info.matched, 40);
    }

    #[test]
    fn parse_empty() {
        assert_eq!(Info::parse(""), Info::default());
    }

    #[test]
    fn parse_skips_unrecognized_counters() {
        let info = Info::parse("Records: 3  Widgets: 9  Duplicates: oops");

        assert_eq!(info.records, 3);
        assert_eq!(info.duplicates, 0);
    }
}
