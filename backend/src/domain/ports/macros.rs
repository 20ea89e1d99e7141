//! Helper macro for declaring port error enums.
//!
//! Every port failure carries a single diagnostic string. The macro expands
//! each variant into a struct variant with a `message` field, a snake-case
//! constructor accepting `impl Into<String>`, and a shared `message()`
//! accessor.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $display:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($display)]
                $variant {
                    /// Diagnostic supplied by the adapter.
                    message: String,
                },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = concat!("Build a `", stringify!($variant), "` error.")]
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant {
                            message: message.into(),
                        }
                    }
                }
            )*

            /// Diagnostic supplied by the adapter.
            #[must_use]
            pub fn message(&self) -> &str {
                match self {
                    $(Self::$variant { message } => message.as_str(),)*
                }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Offline => "sample adapter offline: {message}",
            Rejected => "sample adapter rejected the call: {message}",
        }
    }

    #[test]
    fn constructors_accept_str() {
        let err = SamplePortError::offline("socket closed");
        assert_eq!(err.to_string(), "sample adapter offline: socket closed");
    }

    #[test]
    fn message_returns_diagnostic_for_every_variant() {
        assert_eq!(SamplePortError::offline("a").message(), "a");
        assert_eq!(SamplePortError::rejected(String::from("b")).message(), "b");
    }
}
