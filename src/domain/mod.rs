// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with no UI or storage dependencies.
//!
//! # Modules
//!
//! - [`brightness`]: percentage parsing, [`AdjustmentSpeed`](brightness::AdjustmentSpeed),
//!   [`OverlayDuration`](brightness::OverlayDuration)
//! - [`settings`]: [`FieldId`](settings::FieldId), [`FieldValues`](settings::FieldValues)
//!   and the localized dialog [`Schema`](settings::Schema)

pub mod brightness;
pub mod settings;
