//! The five Kropka content domains
//!
//! One [`ResourceRequest`] constant per domain. Base cache keys are
//! compile-time constants so language partitioning can never produce
//! ambiguous keys.

use crate::fetch::ResourceRequest;
use crate::payload::{list_from_response, object_from_response, ListPayload, ObjectPayload};

pub const STUDIO: ResourceRequest<ObjectPayload> = ResourceRequest {
    endpoint: "/api/v1/studio",
    cache_key_base: "studio:data",
    log_label: "studio",
    transform: object_from_response,
};

pub const PRICES: ResourceRequest<ListPayload> = ResourceRequest {
    endpoint: "/api/v1/prices",
    cache_key_base: "prices:data",
    log_label: "prices",
    transform: list_from_response,
};

pub const EQUIPMENT: ResourceRequest<ListPayload> = ResourceRequest {
    endpoint: "/api/v1/equipment",
    cache_key_base: "equipment:data",
    log_label: "equipment",
    transform: list_from_response,
};

pub const TEACHERS: ResourceRequest<ListPayload> = ResourceRequest {
    endpoint: "/api/v1/teachers",
    cache_key_base: "teachers:data",
    log_label: "teachers",
    transform: list_from_response,
};

pub const RULES: ResourceRequest<ListPayload> = ResourceRequest {
    endpoint: "/api/v1/rules",
    cache_key_base: "rules:data",
    log_label: "rules",
    transform: list_from_response,
};
