#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a cascade [`Rule`](crate::Rule).
///
/// `buckets` lists the marker families that must be present in the input for
/// the rule to be considered at all; rules without buckets are always on.
#[macro_export]
macro_rules! rule {
    (
        name: $name:expr
        $(, buckets: $buckets:expr)?
        $(, priority: $priority:expr)?
        , prod: |$input:ident : &$in_ty:ty| -> $ret_ty:ty $body:block
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            buckets: $crate::MarkerMask::empty() $(| $buckets)?,
            production: Box::new(move |$input: &$in_ty| {
                let result: $ret_ty = $body;
                result
            }),
            priority: { 0 $(+ $priority)? },
        }
    }};
}
