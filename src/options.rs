//! Serializable model of the chart-level `navigation` options group.
//!
//! Every field is optional so the same type describes both a full options
//! set and a partial patch passed to `chart.update()`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{NavigationError, NavigationResult};

/// Ordered CSS declarations (`property -> value`).
pub type StyleMap = IndexMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVerticalAlign {
    Top,
    Middle,
    Bottom,
}

/// Shared placement/appearance options for context buttons.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigationButtonOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<ButtonAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<ButtonVerticalAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl NavigationButtonOptions {
    /// Returns `self` overridden by every field set in `patch`.
    #[must_use]
    pub fn merged_with(&self, patch: &Self) -> Self {
        Self {
            enabled: patch.enabled.or(self.enabled),
            align: patch.align.or(self.align),
            vertical_align: patch.vertical_align.or(self.vertical_align),
            x: patch.x.or(self.x),
            y: patch.y.or(self.y),
            width: patch.width.or(self.width),
            height: patch.height.or(self.height),
            symbol_size: patch.symbol_size.or(self.symbol_size),
            text: patch.text.clone().or_else(|| self.text.clone()),
        }
    }
}

/// Options consumed by exporting controls and navigation bindings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_options: Option<NavigationButtonOptions>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub menu_style: StyleMap,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub menu_item_style: StyleMap,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub menu_item_hover_style: StyleMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bindings_class_name: Option<String>,
    #[serde(rename = "iconsURL", skip_serializing_if = "Option::is_none")]
    pub icons_url: Option<String>,
}

impl NavigationOptions {
    pub fn from_json_str(input: &str) -> NavigationResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            NavigationError::InvalidOptions(format!("failed to parse navigation options: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> NavigationResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            NavigationError::InvalidOptions(format!("failed to serialize navigation options: {e}"))
        })
    }

    /// Returns `self` overridden by every field set in `patch`.
    ///
    /// Style maps merge per declaration; a patched declaration keeps its
    /// original position.
    #[must_use]
    pub fn merged_with(&self, patch: &Self) -> Self {
        let button_options = match (&self.button_options, &patch.button_options) {
            (Some(base), Some(patch)) => Some(base.merged_with(patch)),
            (base, patch) => patch.clone().or_else(|| base.clone()),
        };
        Self {
            button_options,
            menu_style: merge_styles(&self.menu_style, &patch.menu_style),
            menu_item_style: merge_styles(&self.menu_item_style, &patch.menu_item_style),
            menu_item_hover_style: merge_styles(
                &self.menu_item_hover_style,
                &patch.menu_item_hover_style,
            ),
            bindings_class_name: patch
                .bindings_class_name
                .clone()
                .or_else(|| self.bindings_class_name.clone()),
            icons_url: patch.icons_url.clone().or_else(|| self.icons_url.clone()),
        }
    }
}

fn merge_styles(base: &StyleMap, patch: &StyleMap) -> StyleMap {
    let mut merged = base.clone();
    for (property, value) in patch {
        merged.insert(property.clone(), value.clone());
    }
    merged
}
