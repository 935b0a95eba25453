/// Declares a configuration section together with its partial counterpart.
///
/// Generates:
/// - the full struct with every field populated (`Default` from the declared defaults),
/// - `Partial*` with every field optional, used as an override,
/// - a [`Merge`](crate::config::Merge) impl.
///
/// Fields under `fields` are replaced wholesale by an override (this includes
/// `Vec`s). Fields under `nullable` are `Option<T>` on the full struct and
/// an explicit `null` in the override clears them. Fields under `maps` are
/// merged key by key, and fields under `sections` recurse into the nested
/// section's own `Merge` impl.
///
/// Keys a section does not declare are kept in its flattened `extra` map and
/// deep-merged with [`merge_json_maps`](crate::config::merge_json_maps).
///
/// ```ignore
/// config_section! {
///     pub struct AnimationConfig / PartialAnimationConfig {
///         fields {
///             enabled: bool = true,
///             duration: u32 = 750,
///         }
///     }
/// }
/// ```
macro_rules! config_section {
    (
        $(#[$meta:meta])*
        pub struct $name:ident / $partial:ident {
            fields {
                $(
                    $(#[$fmeta:meta])*
                    $field:ident : $ty:ty = $default:expr
                ),* $(,)?
            }
            $(
                nullable {
                    $(
                        $(#[$nmeta:meta])*
                        $nullable:ident : $nty:ty
                    ),* $(,)?
                }
            )?
            $(
                maps {
                    $(
                        $(#[$mmeta:meta])*
                        $map:ident : $mty:ty
                    ),* $(,)?
                }
            )?
            $(
                sections {
                    $(
                        $(#[$smeta:meta])*
                        $section:ident : $sty:ty => $spartial:ty
                    ),* $(,)?
                }
            )?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
            $($(
                $(#[$nmeta])*
                pub $nullable: Option<$nty>,
            )*)?
            $($(
                $(#[$mmeta])*
                #[serde(skip_serializing_if = "std::collections::BTreeMap::is_empty")]
                pub $map: $mty,
            )*)?
            $($(
                $(#[$smeta])*
                pub $section: $sty,
            )*)?
            /// Keys this section does not declare
            #[serde(flatten)]
            pub extra: serde_json::Map<String, serde_json::Value>,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $default, )*
                    $($( $nullable: None, )*)?
                    $($( $map: <$mty>::default(), )*)?
                    $($( $section: <$sty>::default(), )*)?
                    extra: serde_json::Map::new(),
                }
            }
        }

        #[doc = concat!("Override for [`", stringify!($name), "`]; absent fields keep the base value.")]
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $partial {
            $(
                $(#[$fmeta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
            $($(
                $(#[$nmeta])*
                #[serde(
                    deserialize_with = "crate::config::double_option",
                    skip_serializing_if = "Option::is_none"
                )]
                pub $nullable: Option<Option<$nty>>,
            )*)?
            $($(
                $(#[$mmeta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $map: Option<$mty>,
            )*)?
            $($(
                $(#[$smeta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $section: Option<$spartial>,
            )*)?
            #[serde(flatten)]
            pub extra: serde_json::Map<String, serde_json::Value>,
        }

        impl $crate::config::Merge for $name {
            type Partial = $partial;

            fn merge(&self, partial: &Self::Partial) -> Self {
                Self {
                    $(
                        $field: match &partial.$field {
                            Some(value) => value.clone(),
                            None => self.$field.clone(),
                        },
                    )*
                    $($(
                        $nullable: match &partial.$nullable {
                            Some(value) => value.clone(),
                            None => self.$nullable.clone(),
                        },
                    )*)?
                    $($(
                        $map: match &partial.$map {
                            Some(overrides) => {
                                let mut merged = self.$map.clone();
                                merged.extend(
                                    overrides.iter().map(|(key, value)| (key.clone(), value.clone())),
                                );
                                merged
                            }
                            None => self.$map.clone(),
                        },
                    )*)?
                    $($(
                        $section: match &partial.$section {
                            Some(nested) => $crate::config::Merge::merge(&self.$section, nested),
                            None => self.$section.clone(),
                        },
                    )*)?
                    extra: $crate::config::merge_json_maps(&self.extra, &partial.extra),
                }
            }
        }
    };
}
