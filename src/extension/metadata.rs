//! Block metadata for the extension host.
//!
//! [`build_info`] produces the descriptor the host renders: block list,
//! argument specs and menus, with text in the resolved locale. The
//! serialized form uses the host's key names.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use tello_blocks_core::{
    Action, CommandSpec, DefaultValue, FlipDirection, Locale, ParameterKind, TelemetryField,
    COMMAND_SPECS,
};

use crate::config::BridgeConfig;

/// Stable extension identifier.
pub const EXTENSION_ID: &str = "tello";
/// Extension display name.
pub const EXTENSION_NAME: &str = "Tello";
/// Menu holding the flip directions.
pub const FLIP_MENU: &str = "tiltDirection";

const SEPARATOR: &str = "---";

/// Descriptor of the whole extension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtensionInfo {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "menuIconURI")]
    pub menu_icon_uri: String,
    #[serde(rename = "blockIconURI")]
    pub block_icon_uri: String,
    pub blocks: Vec<BlockEntry>,
    pub menus: BTreeMap<&'static str, Menu>,
}

impl ExtensionInfo {
    /// Find a block by opcode.
    pub fn block(&self, opcode: &str) -> Option<&BlockDescriptor> {
        self.blocks.iter().find_map(|entry| match entry {
            BlockEntry::Block(block) if block.opcode == opcode => Some(block),
            _ => None,
        })
    }

    /// Blocks without separators, in display order.
    pub fn descriptors(&self) -> impl Iterator<Item = &BlockDescriptor> {
        self.blocks.iter().filter_map(|entry| match entry {
            BlockEntry::Block(block) => Some(block),
            BlockEntry::Separator => None,
        })
    }
}

/// One entry of the block list.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockEntry {
    /// Visual gap between block groups, serialized as `"---"`.
    Separator,
    Block(BlockDescriptor),
}

impl Serialize for BlockEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BlockEntry::Separator => serializer.serialize_str(SEPARATOR),
            BlockEntry::Block(block) => block.serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDescriptor {
    pub opcode: &'static str,
    pub text: &'static str,
    pub block_type: BlockKind,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub arguments: BTreeMap<&'static str, ArgumentInfo>,
}

/// Whether a block is fire-and-forget or returns a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Command,
    Reporter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgumentInfo {
    #[serde(rename = "type")]
    pub kind: ArgumentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu: Option<&'static str>,
    pub default_value: ArgumentDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentType {
    Number,
    String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ArgumentDefault {
    Number(i32),
    Text(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub accept_reporters: bool,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub text: &'static str,
    pub value: &'static str,
}

/// Build the descriptor for `locale`.
pub fn build_info(locale: Locale, config: &BridgeConfig) -> ExtensionInfo {
    let mut blocks = Vec::with_capacity(COMMAND_SPECS.len() + TelemetryField::ALL.len() + 2);

    for spec in COMMAND_SPECS.iter() {
        // Movement group starts after takeoff/land/emergency
        if spec.action == Action::Up {
            blocks.push(BlockEntry::Separator);
        }
        blocks.push(BlockEntry::Block(command_block(spec, locale)));
    }

    blocks.push(BlockEntry::Separator);
    blocks.extend(
        TelemetryField::ALL
            .into_iter()
            .map(|field| BlockEntry::Block(reporter_block(field, locale))),
    );

    let mut menus = BTreeMap::new();
    menus.insert(FLIP_MENU, flip_menu(locale));

    ExtensionInfo {
        id: EXTENSION_ID,
        name: EXTENSION_NAME,
        menu_icon_uri: config.menu_icon_uri.clone(),
        block_icon_uri: config.block_icon_uri.clone(),
        blocks,
        menus,
    }
}

fn command_block(spec: &CommandSpec, locale: Locale) -> BlockDescriptor {
    let mut arguments = BTreeMap::new();
    if let Some(name) = spec.parameter.argument_name() {
        arguments.insert(name, argument_info(spec));
    }

    BlockDescriptor {
        opcode: spec.opcode,
        text: spec.text.get(locale),
        block_type: BlockKind::Command,
        arguments,
    }
}

fn argument_info(spec: &CommandSpec) -> ArgumentInfo {
    let default_value = match spec.default_value {
        DefaultValue::Number(n) => ArgumentDefault::Number(n),
        DefaultValue::Direction(direction) => ArgumentDefault::Text(direction.code()),
        DefaultValue::None => ArgumentDefault::Text(""),
    };

    match spec.parameter {
        ParameterKind::Direction => ArgumentInfo {
            kind: ArgumentType::String,
            menu: Some(FLIP_MENU),
            default_value,
        },
        _ => ArgumentInfo {
            kind: ArgumentType::Number,
            menu: None,
            default_value,
        },
    }
}

fn reporter_block(field: TelemetryField, locale: Locale) -> BlockDescriptor {
    BlockDescriptor {
        opcode: field.opcode(),
        text: field.text().get(locale),
        block_type: BlockKind::Reporter,
        arguments: BTreeMap::new(),
    }
}

fn flip_menu(locale: Locale) -> Menu {
    Menu {
        accept_reporters: true,
        items: FlipDirection::ALL
            .into_iter()
            .map(|direction| MenuItem {
                text: direction.label().get(locale),
                value: direction.code(),
            })
            .collect(),
    }
}
