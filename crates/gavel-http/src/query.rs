//! Query string encoding for request options.
//!
//! Option structs name their fields after the query parameters. Scalars are
//! written as-is; structured values go through [`json`] and travel as a
//! single parameter holding their JSON text.

use serde::{ser::Error as _, Serialize, Serializer};

use crate::Result;

/// Encodes `opts` as `name=value&...`, in field declaration order.
pub fn querify<T: Serialize>(opts: &T) -> Result<String> {
    Ok(serde_urlencoded::to_string(opts)?)
}

/// `serialize_with` helper that writes a value as its JSON text.
pub fn json<T, S>(value: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    let s = serde_json::to_string(value).map_err(S::Error::custom)?;
    serializer.serialize_str(&s)
}

#[cfg(test)]
mod tests {
    use gavel_models::ChatAdministratorRights;

    use super::querify;
    use crate::{GetMyDefaultAdministratorRightsOptions, SetMyDefaultAdministratorRightsOptions};

    fn params(query: &str) -> Vec<(String, String)> {
        query
            .split('&')
            .map(|pair| {
                let mut it = pair.splitn(2, '=');
                (
                    it.next().unwrap().to_string(),
                    it.next().unwrap_or_default().to_string(),
                )
            })
            .collect()
    }

    #[test]
    fn for_channels_appears_once() {
        for &for_channels in [false, true].iter() {
            let get = querify(&GetMyDefaultAdministratorRightsOptions { for_channels }).unwrap();
            let set = querify(&SetMyDefaultAdministratorRightsOptions {
                rights: ChatAdministratorRights::default(),
                for_channels,
            })
            .unwrap();

            for query in [get, set].iter() {
                let values = params(query)
                    .into_iter()
                    .filter(|(k, _)| k == "for_channels")
                    .map(|(_, v)| v)
                    .collect::<Vec<_>>();

                assert_eq!(values, vec![for_channels.to_string()]);
            }
        }
    }

    #[test]
    fn get_options() {
        assert_eq!(
            querify(&GetMyDefaultAdministratorRightsOptions { for_channels: true }).unwrap(),
            "for_channels=true"
        );
        assert_eq!(
            querify(&GetMyDefaultAdministratorRightsOptions::default()).unwrap(),
            "for_channels=false"
        );
    }

    #[test]
    fn rights_travel_as_json() {
        let opts = SetMyDefaultAdministratorRightsOptions {
            rights: ChatAdministratorRights {
                can_manage_chat: true,
                can_pin_messages: true,
                ..Default::default()
            },
            for_channels: false,
        };

        let query = querify(&opts).unwrap();
        let decoded: Vec<(String, String)> = serde_urlencoded::from_str(&query).unwrap();

        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].0, "rights");
        assert_eq!(decoded[1], ("for_channels".to_string(), "false".to_string()));

        let rights: ChatAdministratorRights = serde_json::from_str(&decoded[0].1).unwrap();
        assert_eq!(rights, opts.rights);
        assert!(decoded[0].1.contains("\"can_pin_messages\":true"));
        assert!(!decoded[0].1.contains("can_post_messages"));
    }

    #[test]
    fn deterministic() {
        let opts = SetMyDefaultAdministratorRightsOptions {
            rights: ChatAdministratorRights::all(),
            for_channels: true,
        };

        assert_eq!(querify(&opts).unwrap(), querify(&opts.clone()).unwrap());
        assert!(querify(&opts).unwrap().starts_with("rights=%7B%22is_anonymous%22%3Atrue"));
    }
}
