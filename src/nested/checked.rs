//! Checked `put`/`get` for call sites whose map or keys may be absent.

use super::{NestedLookup, NestedMap};
use crate::macros::trace_event;
use crate::{Error, Result};

/// A tuple of optional keys that is only usable when every key is present.
pub trait MaybeKeys {
    /// The tuple of present keys.
    type Keys;

    /// Unwraps every key, or reports the one-based position of the first
    /// absent key.
    fn present(self) -> core::result::Result<Self::Keys, usize>;
}

macro_rules! maybe_keys {
    ($(($($K:ident $k:ident $pos:literal),+)),+ $(,)?) => {
        $(
            impl<$($K),+> MaybeKeys for ($(Option<$K>,)+) {
                type Keys = ($($K,)+);

                fn present(self) -> core::result::Result<Self::Keys, usize> {
                    let ($($k,)+) = self;
                    Ok(($($k.ok_or::<usize>($pos)?,)+))
                }
            }
        )+
    };
}

maybe_keys! {
    (K1 k1 1),
    (K1 k1 1, K2 k2 2),
    (K1 k1 1, K2 k2 2, K3 k3 3),
    (K1 k1 1, K2 k2 2, K3 k3 3, K4 k4 4),
    (K1 k1 1, K2 k2 2, K3 k3 3, K4 k4 4, K5 k5 5),
    (K1 k1 1, K2 k2 2, K3 k3 3, K4 k4 4, K5 k5 5, K6 k6 6),
}

fn reject(operation: &'static str, position: usize) -> Error {
    trace_event!(error, operation, position, "absent argument in nested map access");
    Error::InvalidArgument {
        operation,
        position,
    }
}

/// Stores `value` under `keys` in `map`, creating missing levels.
///
/// Returns the previous value, if any.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `map` or any key is `None`; the map
/// is left untouched.
pub fn put<M, P>(
    map: Option<&mut M>,
    keys: P,
    value: <M as NestedMap<P::Keys>>::Value,
) -> Result<Option<<M as NestedMap<P::Keys>>::Value>>
where
    P: MaybeKeys,
    M: NestedMap<P::Keys> + ?Sized,
{
    let Some(map) = map else {
        return Err(reject("put", 0));
    };
    let keys = keys.present().map_err(|position| reject("put", position))?;
    Ok(map.put_nested(keys, value))
}

/// Looks up `keys` in `map` without creating any level.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `map` or any key is `None`.
pub fn get<'m, M, P>(
    map: Option<&'m M>,
    keys: P,
) -> Result<Option<&'m <M as NestedLookup<P::Keys>>::Value>>
where
    P: MaybeKeys,
    M: NestedLookup<P::Keys> + ?Sized,
{
    let Some(map) = map else {
        return Err(reject("get", 0));
    };
    let keys = keys.present().map_err(|position| reject("get", position))?;
    Ok(map.get_nested(keys))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    type Table = BTreeMap<&'static str, BTreeMap<&'static str, i32>>;

    #[test]
    fn present_keys_pass_through() {
        let mut table = Table::new();
        assert_eq!(put(Some(&mut table), (Some("x"), Some("y")), 5), Ok(None));
        assert_eq!(get(Some(&table), (Some("x"), Some("y"))), Ok(Some(&5)));
        assert_eq!(get(Some(&table), (Some("x"), Some("q"))), Ok(None));
    }

    #[test]
    fn absent_map_is_position_zero() {
        let err = put(None::<&mut Table>, (Some("x"), Some("y")), 1).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgument {
                operation: "put",
                position: 0
            }
        );

        let err = get(None::<&Table>, (Some("x"), Some("y"))).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgument {
                operation: "get",
                position: 0
            }
        );
    }

    #[test]
    fn absent_key_reports_its_position_and_leaves_map_alone() {
        let mut table = Table::new();
        let err = put(Some(&mut table), (Some("x"), None), 1).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgument {
                operation: "put",
                position: 2
            }
        );
        assert!(table.is_empty());

        let err = get(Some(&table), (None::<&str>, Some("y"))).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgument {
                operation: "get",
                position: 1
            }
        );
    }

    #[test]
    fn maybe_keys_finds_first_gap() {
        assert_eq!((Some(1), Some(2), Some(3)).present(), Ok((1, 2, 3)));
        assert_eq!((Some(1), None::<i32>, None::<i32>).present(), Err(2));
        assert_eq!((None::<u8>,).present(), Err(1));
    }

    #[test]
    fn gap_positions_cover_every_arity() {
        assert_eq!((Some('a'), None::<char>).present(), Err(2));
        assert_eq!((Some(1u8), Some(2u8), Some(3u8), None::<u8>).present(), Err(4));
        assert_eq!(
            (Some(1), Some(2), Some(3), Some(4), None::<i32>).present(),
            Err(5)
        );
        assert_eq!(
            (Some(1), Some(2), Some(3), Some(4), Some(5), None::<i32>).present(),
            Err(6)
        );
        assert_eq!(
            (Some(1), Some(2), Some(3), Some(4), Some(5), Some(6)).present(),
            Ok((1, 2, 3, 4, 5, 6))
        );
    }
}
