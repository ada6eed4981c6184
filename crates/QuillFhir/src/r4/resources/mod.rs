//! R4 resources and the polymorphic [`Resource`] type.
//!
//! The `resources!` table at the bottom of this file is the one list of
//! modeled resources. It generates the [`Resource`] enum, the
//! [`ResourceType`] tag, and the name-to-decoder table that
//! [`Resource::from_json`](crate::codec::FhirJson::from_json) consults.
//! Any other `resourceType` decodes to [`Resource::Unknown`].

pub mod allergy_intolerance;
pub mod appointment;
pub mod basic;
pub mod bundle;
pub mod care_plan;
pub mod condition;
pub mod diagnostic_report;
pub mod encounter;
pub mod immunization;
pub mod location;
pub mod medication;
pub mod medication_request;
pub mod observation;
pub mod operation_outcome;
pub mod organization;
pub mod parameters;
pub mod patient;
pub mod practitioner;
pub mod procedure;
pub mod unknown;
pub mod value_set;

pub use allergy_intolerance::*;
pub use appointment::*;
pub use basic::*;
pub use bundle::*;
pub use care_plan::*;
pub use condition::*;
pub use diagnostic_report::*;
pub use encounter::*;
pub use immunization::*;
pub use location::*;
pub use medication::*;
pub use medication_request::*;
pub use observation::*;
pub use operation_outcome::*;
pub use organization::*;
pub use parameters::*;
pub use patient::*;
pub use practitioner::*;
pub use procedure::*;
pub use unknown::*;
pub use value_set::*;

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde_json::Value;

use crate::codec::{expect_object, invalid_type, DecodeResult, FhirJson, JsonPath, NamedResource};
use crate::error::{DecodeError, DecodeErrorKind};
use crate::r4::{Code, Id, Meta, Uri};

/// Decodes one resource object into its [`Resource`] variant.
pub type ResourceDecoder = fn(&Value, &JsonPath<'_>) -> DecodeResult<Resource>;

fn decode_variant<T>(value: &Value, path: &JsonPath<'_>) -> DecodeResult<Resource>
where
    T: FhirJson + Into<Resource>,
{
    T::from_json(value, path).map(Into::into)
}

macro_rules! resources {
    (domain: [$($domain:ident),+ $(,)?], plain: [$($plain:ident),+ $(,)?] $(,)?) => {
        resources!(@all $($domain,)+ $($plain,)+);

        impl Resource {
            /// Resources contained inline. Only domain resources carry them.
            pub fn contained(&self) -> &[Resource] {
                match self {
                    $(Resource::$domain(resource) => &resource.contained,)+
                    _ => &[],
                }
            }
        }
    };
    (@all $($name:ident,)+) => {
        /// Any FHIR R4 resource.
        ///
        /// Modeled resources get a strongly typed variant. Everything else is
        /// kept as [`UnknownResource`] and written back as it was read.
        #[derive(Debug, Clone)]
        pub enum Resource {
            $($name($name),)+
            Unknown(UnknownResource),
        }

        // Manual PartialEq implementation to break MIR optimization cycle with Bundle
        impl PartialEq for Resource {
            #[inline(never)]
            fn eq(&self, other: &Self) -> bool {
                match (self, other) {
                    $((Self::$name(a), Self::$name(b)) => a == b,)+
                    (Self::Unknown(a), Self::Unknown(b)) => a == b,
                    _ => false,
                }
            }
        }

        $(
            impl From<$name> for Resource {
                fn from(resource: $name) -> Self {
                    Resource::$name(resource)
                }
            }
        )+

        impl From<UnknownResource> for Resource {
            fn from(resource: UnknownResource) -> Self {
                Resource::Unknown(resource)
            }
        }

        /// Names a modeled resource type.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ResourceType {
            $($name,)+
        }

        impl ResourceType {
            /// Every modeled resource type.
            pub const ALL: &'static [ResourceType] = &[$(ResourceType::$name,)+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(ResourceType::$name => stringify!($name),)+
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($name) => Some(ResourceType::$name),)+
                    _ => None,
                }
            }

            /// The `resourceType` the struct itself writes.
            pub const fn declared_name(self) -> &'static str {
                match self {
                    $(ResourceType::$name => <$name as NamedResource>::RESOURCE_TYPE,)+
                }
            }
        }

        static RESOURCE_DECODERS: OnceLock<HashMap<&'static str, ResourceDecoder>> =
            OnceLock::new();

        fn get_resource_decoders() -> &'static HashMap<&'static str, ResourceDecoder> {
            RESOURCE_DECODERS.get_or_init(|| {
                let mut m: HashMap<&'static str, ResourceDecoder> = HashMap::new();
                $(
                    m.insert(
                        <$name as NamedResource>::RESOURCE_TYPE,
                        decode_variant::<$name> as ResourceDecoder,
                    );
                )+
                m
            })
        }

        impl Resource {
            /// The `resourceType` of this resource, modeled or not.
            pub fn resource_type(&self) -> &str {
                match self {
                    $(Resource::$name(_) => <$name as NamedResource>::RESOURCE_TYPE,)+
                    Resource::Unknown(resource) => &resource.resource_type,
                }
            }

            /// The modeled type, or `None` for unknown resources.
            pub fn modeled_type(&self) -> Option<ResourceType> {
                match self {
                    $(Resource::$name(_) => Some(ResourceType::$name),)+
                    Resource::Unknown(_) => None,
                }
            }

            pub fn id(&self) -> Option<&Id> {
                match self {
                    $(Resource::$name(resource) => resource.id.as_ref(),)+
                    Resource::Unknown(resource) => resource.id.as_ref(),
                }
            }

            pub fn meta(&self) -> Option<&Meta> {
                match self {
                    $(Resource::$name(resource) => resource.meta.as_ref(),)+
                    Resource::Unknown(resource) => resource.meta.as_ref(),
                }
            }

            pub fn implicit_rules(&self) -> Option<&Uri> {
                match self {
                    $(Resource::$name(resource) => resource.implicit_rules.as_ref(),)+
                    Resource::Unknown(resource) => resource.implicit_rules.as_ref(),
                }
            }

            pub fn language(&self) -> Option<&Code> {
                match self {
                    $(Resource::$name(resource) => resource.language.as_ref(),)+
                    Resource::Unknown(resource) => resource.language.as_ref(),
                }
            }
        }

        impl FhirJson for Resource {
            fn from_json(value: &Value, path: &JsonPath<'_>) -> DecodeResult<Self> {
                let object = expect_object(value, path)?;
                let resource_type = match object.get("resourceType") {
                    Some(Value::String(resource_type)) => resource_type.as_str(),
                    None | Some(Value::Null) => {
                        return Err(DecodeError::new(path, DecodeErrorKind::MissingResourceType));
                    }
                    Some(other) => {
                        return Err(invalid_type(&path.field("resourceType"), "string", other));
                    }
                };
                // Top-level errors read `Patient.name[0]` rather than `$.name[0]`.
                let labeled = JsonPath::Root(resource_type);
                let path = if path.is_root() { &labeled } else { path };

                match resource_decoder(resource_type) {
                    Some(decode) => decode(value, path),
                    None => {
                        tracing::debug!(resource_type, path = %path, "decoding as unknown resource");
                        UnknownResource::from_json(value, path).map(Resource::Unknown)
                    }
                }
            }

            fn to_json(&self) -> Value {
                match self {
                    $(Resource::$name(resource) => resource.to_json(),)+
                    Resource::Unknown(resource) => resource.to_json(),
                }
            }
        }
    };
}

resources! {
    domain: [
        AllergyIntolerance,
        Appointment,
        Basic,
        CarePlan,
        Condition,
        DiagnosticReport,
        Encounter,
        Immunization,
        Location,
        Medication,
        MedicationRequest,
        Observation,
        OperationOutcome,
        Organization,
        Patient,
        Practitioner,
        Procedure,
        ValueSet,
    ],
    plain: [Bundle, Parameters],
}

/// Looks up the decoder for a modeled `resourceType`.
pub fn resource_decoder(resource_type: &str) -> Option<ResourceDecoder> {
    get_resource_decoders().get(resource_type).copied()
}

impl Resource {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Resource::Unknown(_))
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! serde_via_fhir_json {
    ($($ty:ty),+) => {
        $(
            impl serde::Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serde::Serialize::serialize(&self.to_json(), serializer)
                }
            }

            impl<'de> serde::Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    let value = <Value as serde::Deserialize>::deserialize(deserializer)?;
                    <$ty>::from_json(&value, &JsonPath::root()).map_err(serde::de::Error::custom)
                }
            }
        )+
    };
}

serde_via_fhir_json!(Resource, UnknownResource);
