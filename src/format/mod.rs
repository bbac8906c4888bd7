// SPDX-FileCopyrightText: 2026 Iris Authors
// SPDX-License-Identifier: LicenseRef-Iris-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Iris and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Export parsing: the JSON record envelope and the embedded XML message dialect.

pub mod dataset_json;
pub mod message_xml;

pub use dataset_json::{load_dataset, DatasetParseError};
pub use message_xml::flatten;
