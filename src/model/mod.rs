// SPDX-FileCopyrightText: 2026 Iris Authors
// SPDX-License-Identifier: LicenseRef-Iris-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Iris and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Domain model: values, records, datasets, demo fixtures.

pub mod dataset;
pub mod fixtures;
pub mod record;
pub mod value;

pub use dataset::Dataset;
pub use record::{
    Digest, Message, Record, FLATTEN_ERROR_KEY, FLATTEN_ERROR_NO_MESSAGE,
    MISSING_FIELD_PLACEHOLDER,
};
pub use value::{field_map_from_json, FieldMap, Scalar, Value};
