use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serializer};

/// Position tables are written with string keys ("1" = 5) because TOML and
/// JSON object keys are strings; internally positions are integers.
pub mod position_table {
    use super::*;

    pub fn serialize<S>(value: &BTreeMap<u32, u32>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(value.iter().map(|(k, v)| (k.to_string(), v)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<u32, u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, u32>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(k, v)| {
                k.parse::<u32>()
                    .map(|k| (k, v))
                    .map_err(|_| serde::de::Error::custom(format!("invalid position key: {k}")))
            })
            .collect()
    }
}

/// Same string-keyed convention for the per-program override map.
pub mod program_tables {
    use super::*;

    pub fn serialize<S>(
        value: &BTreeMap<String, BTreeMap<u32, u32>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(value.iter().map(|(program, table)| {
            let table: BTreeMap<String, u32> =
                table.iter().map(|(k, v)| (k.to_string(), *v)).collect();
            (program, table)
        }))
    }

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<BTreeMap<String, BTreeMap<u32, u32>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, BTreeMap<String, u32>>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(program, table)| {
                let table = table
                    .into_iter()
                    .map(|(k, v)| {
                        k.parse::<u32>().map(|k| (k, v)).map_err(|_| {
                            serde::de::Error::custom(format!("invalid position key: {k}"))
                        })
                    })
                    .collect::<Result<BTreeMap<u32, u32>, D::Error>>()?;
                Ok((program, table))
            })
            .collect()
    }
}
