// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! [`TrustSource`](hcert_abstractions::TrustSource) implementations.
//!
//! - [`StaticTrustSource`]: a fixed, caller supplied list.
//! - [`GroupTrustSource`]: merges several sources, tolerating partial failure.
//! - [`EuGatewayTrustSource`]: the paginated EU signer certificate endpoint.
//! - [`RkiTrustSource`]: the signed DSC trust list published for Germany.
//!
//! Network sources go through an [`HttpFetcher`], so response handling can be exercised
//! without a network.

pub mod eu_gateway;
pub mod group;
pub mod http;
pub mod rki;
pub mod static_source;

pub use eu_gateway::{collect_pages, EuGatewayTrustSource, GatewayPage};
pub use group::GroupTrustSource;
pub use http::{HttpFetcher, HttpResponse, UreqFetcher, DEFAULT_TIMEOUT};
pub use rki::{parse_trust_list, RkiTrustList, RkiTrustListEntry, RkiTrustSource};
pub use static_source::StaticTrustSource;
