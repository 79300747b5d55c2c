//! Code generation for record kinds.

/// Declare record kinds from their field tables.
///
/// Each kind becomes a typed facade over [`Record`](crate::Record) with:
/// - a static [`RecordSchema`](crate::RecordSchema) (the name table),
/// - one read-only accessor per field returning `Option<&Value>`,
/// - one `with_<field>` builder method per field accepting the declared
///   type or a [`Deferred`](crate::Deferred),
/// - `PartialEq`, `Debug`, [`RecordType`](crate::RecordType) and the
///   conversions into [`Value`](crate::Value) and [`OrDeferred`](crate::OrDeferred).
///
/// Field types are `String`, `Integer`, `Double`, `Boolean`, another record
/// kind in scope, or a list of any of those written as `[Type]`. A union of
/// record kinds is written `(KindA | KindB)`; its builder takes any record and
/// returns a [`ShapeResult`](crate::ShapeResult), failing when the record is
/// none of the variants.
///
/// ```
/// medialive_core::define_records! {
///     namespace = "Example::Service::Thing";
///     index = SCHEMAS;
///
///     /// A destination.
///     Endpoint {
///         url: String => "url",
///         ports: [Integer] => "ports",
///     }
/// }
///
/// let endpoint = Endpoint::new().with_url("rtmp://x").with_ports(vec![1935]);
/// assert_eq!(endpoint.url().and_then(|v| v.as_str()), Some("rtmp://x"));
/// assert_eq!(SCHEMAS.len(), 1);
/// ```
///
/// ```
/// medialive_core::define_records! {
///     namespace = "Example::Service::Thing";
///     index = SCHEMAS;
///
///     Rtmp { url: String => "url" }
///     Srt { port: Integer => "port" }
///     Output { target: (Rtmp | Srt) => "target" }
/// }
///
/// let output = Output::new().with_target(Srt::new().with_port(9000)).unwrap();
/// assert!(output.target().is_some());
/// assert!(Output::new().with_target(Output::new()).is_err());
/// ```
#[macro_export]
macro_rules! define_records {
    (@shape String) => { $crate::Shape::Scalar($crate::ScalarType::String) };
    (@shape Integer) => { $crate::Shape::Scalar($crate::ScalarType::Integer) };
    (@shape Double) => { $crate::Shape::Scalar($crate::ScalarType::Double) };
    (@shape Boolean) => { $crate::Shape::Scalar($crate::ScalarType::Boolean) };
    (@shape [String]) => { $crate::Shape::List($crate::Element::Scalar($crate::ScalarType::String)) };
    (@shape [Integer]) => { $crate::Shape::List($crate::Element::Scalar($crate::ScalarType::Integer)) };
    (@shape [Double]) => { $crate::Shape::List($crate::Element::Scalar($crate::ScalarType::Double)) };
    (@shape [Boolean]) => { $crate::Shape::List($crate::Element::Scalar($crate::ScalarType::Boolean)) };
    (@shape ($first:ident $(| $rest:ident)+)) => {
        $crate::Shape::Union(&[$first::schema $(, $rest::schema)+])
    };
    (@shape [$kind:ident]) => { $crate::Shape::List($crate::Element::Record($kind::schema)) };
    (@shape $kind:ident) => { $crate::Shape::Record($kind::schema) };

    (@arg String) => { ::std::string::String };
    (@arg Integer) => { i64 };
    (@arg Double) => { $crate::Number };
    (@arg Boolean) => { bool };
    (@arg [$inner:tt]) => { ::std::vec::Vec<$crate::define_records!(@arg $inner)> };
    (@arg $kind:ident) => { $kind };

    (@builder $field:ident ($($variants:tt)*)) => {
        $crate::paste::paste! {
            pub fn [<with_ $field>](
                self,
                value: impl ::std::convert::Into<$crate::OrDeferred<$crate::Record>>,
            ) -> $crate::ShapeResult<Self> {
                let value: $crate::OrDeferred<$crate::Record> = value.into();
                self.0
                    .with(stringify!($field), $crate::IntoValue::into_value(value))
                    .map(Self)
            }
        }
    };
    (@builder $field:ident $ty:tt) => {
        $crate::paste::paste! {
            pub fn [<with_ $field>](
                self,
                value: impl ::std::convert::Into<$crate::OrDeferred<$crate::define_records!(@arg $ty)>>,
            ) -> Self {
                let value: $crate::OrDeferred<$crate::define_records!(@arg $ty)> = value.into();
                Self(self.0.with_unchecked(stringify!($field), $crate::IntoValue::into_value(value)))
            }
        }
    };

    (@record $ns:literal;
        $(#[$meta:meta])*
        $name:ident { $( $field:ident : $ty:tt => $wire:literal ),* }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq)]
        pub struct $name($crate::Record);

        impl $name {
            /// Name table and structural contract of this kind.
            pub fn schema() -> &'static $crate::RecordSchema {
                static SCHEMA: $crate::RecordSchema = $crate::RecordSchema {
                    name: stringify!($name),
                    qualified_name: concat!($ns, ".", stringify!($name)),
                    fields: &[
                        $(
                            $crate::FieldSpec {
                                name: stringify!($field),
                                wire: $wire,
                                shape: $crate::define_records!(@shape $ty),
                            },
                        )*
                    ],
                };
                &SCHEMA
            }

            /// A record with no fields present.
            pub fn new() -> Self {
                Self($crate::Record::empty(Self::schema()))
            }

            pub fn as_record(&self) -> &$crate::Record {
                &self.0
            }

            pub fn into_record(self) -> $crate::Record {
                self.0
            }

            pub fn to_canonical(&self) -> $crate::CanonicalMap {
                self.0.to_canonical()
            }

            $(
                pub fn $field(&self) -> ::std::option::Option<&$crate::Value> {
                    self.0.get(stringify!($field))
                }

                $crate::define_records!(@builder $field $ty);
            )*
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(&self.0, f)
            }
        }

        impl $crate::RecordType for $name {
            fn schema() -> &'static $crate::RecordSchema {
                $name::schema()
            }

            fn as_record(&self) -> &$crate::Record {
                &self.0
            }

            fn into_record(self) -> $crate::Record {
                self.0
            }

            fn from_record_unchecked(record: $crate::Record) -> Self {
                Self(record)
            }
        }

        impl $crate::IntoValue for $name {
            fn into_value(self) -> $crate::Value {
                $crate::Value::Record(self.0)
            }
        }

        impl ::std::convert::From<$name> for $crate::OrDeferred<$name> {
            fn from(value: $name) -> Self {
                $crate::OrDeferred::Value(value)
            }
        }

        impl ::std::convert::From<$name> for $crate::OrDeferred<$crate::Record> {
            fn from(value: $name) -> Self {
                $crate::OrDeferred::Value(value.0)
            }
        }

        impl ::std::convert::From<$name> for $crate::Record {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl ::std::convert::From<$name> for $crate::Value {
            fn from(value: $name) -> Self {
                $crate::Value::Record(value.0)
            }
        }

        impl ::std::convert::TryFrom<$crate::Record> for $name {
            type Error = $crate::ShapeError;

            fn try_from(record: $crate::Record) -> $crate::ShapeResult<Self> {
                <$name as $crate::RecordType>::from_record(record)
            }
        }
    };

    (
        namespace = $ns:literal;
        index = $index:ident;
        $(
            $(#[$meta:meta])*
            $name:ident { $( $field:ident : $ty:tt => $wire:literal ),* $(,)? }
        )*
    ) => {
        $(
            $crate::define_records!(@record $ns; $(#[$meta])* $name { $( $field : $ty => $wire ),* });
        )*

        /// Every record kind declared in this module.
        pub static $index: &[$crate::SchemaRef] = &[$( $name::schema ),*];
    };
}
