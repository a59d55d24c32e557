/// Generates a collection with syntactic sugar for vecs, sets, maps and [`Parameters`](crate::Parameters).
///
/// ## Example
///
/// ```
/// use std::collections::{BTreeMap, HashSet};
/// use andreani_rs::{collection, Parameters};
///
/// let s: Vec<_> = collection![1, 2, 3];
/// println!("{:?}", s);
/// let s: HashSet<_> = collection!{ 1, 2, 3 };
/// println!("{:?}", s);
/// let s: BTreeMap<_, _> = collection!{ 1 => 2, 3 => 4 };
/// println!("{:?}", s);
/// let p: Parameters = collection!{ "NumeroAndreani" => "310000000000001" };
/// assert_eq!(p.get("NumeroAndreani"), Some("310000000000001"));
/// ```
#[macro_export]
macro_rules! collection {
    ($($k:expr => $v:expr),* $(,)?) => {{
        core::convert::From::from([$(($k, $v),)*])
    }};
    ($($v:expr),* $(,)?) => {{
        core::convert::From::from([$($v,)*])
    }};
}
