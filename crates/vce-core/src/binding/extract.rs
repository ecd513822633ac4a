//! Binds-document extractor.
//!
//! Document shape (abridged):
//! ```text
//! <Root PresetName="Custom" MajorVersion="4" MinorVersion="0">
//!   <PrimaryFire>
//!     <Primary Device="Keyboard" Key="Key_Space" />
//!     <Secondary Device="{NoDevice}" Key="" />
//!   </PrimaryFire>
//!   <DeployHeatSink>
//!     <Primary Device="ThrustMasterHOTAS4" Key="Joy_3" />
//!     <Secondary Device="Mouse" Key="Mouse_1" />
//!   </DeployHeatSink>
//!   ...
//! </Root>
//! ```
//!
//! Every direct child of `Root` is one command.  The slot resolution order is
//! Primary first, then Secondary; a slot is usable only when its `Device` is
//! `Keyboard` or `Mouse` and it carries a non-empty `Key`.  Commands with no
//! usable slot are skipped silently: they are bound to other hardware.

use std::collections::BTreeMap;

use roxmltree::{Document, Node};
use thiserror::Error;
use tracing::debug;

use super::{BindingDevice, BindingRecord};

/// Tag name of the container element holding one child per command.
pub const ROOT_TAG: &str = "Root";

const PRIMARY_TAG: &str = "Primary";
const SECONDARY_TAG: &str = "Secondary";
const DEVICE_ATTR: &str = "Device";
const KEY_ATTR: &str = "Key";

/// Errors that can occur while extracting bindings from a binds document.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The text is not well-formed XML.
    #[error("failed to parse bindings document: {0}")]
    Parse(#[from] roxmltree::Error),

    /// The document has no `Root` container element.
    #[error("bindings document has no <{tag}> element", tag = ROOT_TAG)]
    MissingRoot,
}

/// Extracts every keyboard- or mouse-bound command from `document_text`.
///
/// The returned map is keyed by command name (the element's tag name).
/// Commands that are absent from the document, or bound only to other
/// hardware, do not appear in it.
///
/// # Errors
///
/// Returns [`ExtractError::Parse`] for malformed XML and
/// [`ExtractError::MissingRoot`] when no `Root` element exists.
pub fn extract_bindings(document_text: &str) -> Result<BTreeMap<String, BindingRecord>, ExtractError> {
    let document = Document::parse(document_text)?;
    let root = find_root(&document).ok_or(ExtractError::MissingRoot)?;

    let mut bindings = BTreeMap::new();
    for command in root.children().filter(Node::is_element) {
        let name = command.tag_name().name();
        match resolve_command(command) {
            Some((device, key)) => {
                bindings.insert(name.to_string(), BindingRecord::new(name, device, key));
            }
            None => debug!(command = name, "no keyboard or mouse binding, skipping"),
        }
    }
    Ok(bindings)
}

/// The document element if it is `Root`, otherwise the first `Root` below it.
fn find_root<'a, 'input>(document: &'a Document<'input>) -> Option<Node<'a, 'input>> {
    let top = document.root_element();
    if top.has_tag_name(ROOT_TAG) {
        return Some(top);
    }
    top.descendants().find(|n| n.has_tag_name(ROOT_TAG))
}

/// Resolves a command element to its device/key pair, Primary before Secondary.
fn resolve_command(command: Node<'_, '_>) -> Option<(BindingDevice, String)> {
    [PRIMARY_TAG, SECONDARY_TAG]
        .into_iter()
        .find_map(|slot| slot_binding(command, slot))
}

fn slot_binding(command: Node<'_, '_>, slot: &str) -> Option<(BindingDevice, String)> {
    let slot = command
        .children()
        .find(|n| n.is_element() && n.has_tag_name(slot))?;
    let device = BindingDevice::from_attribute(slot.attribute(DEVICE_ATTR)?)?;
    let key = slot.attribute(KEY_ATTR).filter(|k| !k.is_empty())?;
    Some((device, key.to_string()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" ?>
<Root PresetName="Custom" MajorVersion="4" MinorVersion="0">
{body}
</Root>"#
        )
    }

    #[test]
    fn test_keyboard_primary_is_extracted() {
        // Arrange
        let doc = wrap(
            r#"<PrimaryFire>
                 <Primary Device="Keyboard" Key="Key_Space" />
                 <Secondary Device="{NoDevice}" Key="" />
               </PrimaryFire>"#,
        );

        // Act
        let bindings = extract_bindings(&doc).expect("extract");

        // Assert
        assert_eq!(
            bindings.get("PrimaryFire"),
            Some(&BindingRecord::new("PrimaryFire", BindingDevice::Keyboard, "Key_Space"))
        );
    }

    #[test]
    fn test_secondary_used_when_primary_is_joystick() {
        let doc = wrap(
            r#"<DeployHeatSink>
                 <Primary Device="ThrustMasterHOTAS4" Key="Joy_3" />
                 <Secondary Device="Mouse" Key="Mouse_1" />
               </DeployHeatSink>"#,
        );

        let bindings = extract_bindings(&doc).expect("extract");

        let record = &bindings["DeployHeatSink"];
        assert_eq!(record.device, BindingDevice::Mouse);
        assert_eq!(record.key, "Mouse_1");
    }

    #[test]
    fn test_primary_preferred_when_both_slots_usable() {
        let doc = wrap(
            r#"<LandingGearToggle>
                 <Primary Device="Keyboard" Key="Key_L" />
                 <Secondary Device="Mouse" Key="Mouse_3" />
               </LandingGearToggle>"#,
        );

        let bindings = extract_bindings(&doc).expect("extract");

        assert_eq!(bindings["LandingGearToggle"].key, "Key_L");
        assert_eq!(bindings["LandingGearToggle"].device, BindingDevice::Keyboard);
    }

    #[test]
    fn test_secondary_used_when_primary_slot_absent() {
        let doc = wrap(
            r#"<ChargeECM>
                 <Secondary Device="Keyboard" Key="Key_0" />
               </ChargeECM>"#,
        );

        let bindings = extract_bindings(&doc).expect("extract");

        assert_eq!(bindings["ChargeECM"].key, "Key_0");
    }

    #[test]
    fn test_secondary_used_when_primary_keyboard_has_no_key() {
        let doc = wrap(
            r#"<Hyperspace>
                 <Primary Device="Keyboard" />
                 <Secondary Device="Keyboard" Key="Key_J" />
               </Hyperspace>"#,
        );

        let bindings = extract_bindings(&doc).expect("extract");

        assert_eq!(bindings["Hyperspace"].key, "Key_J");
    }

    #[test]
    fn test_commands_without_keyboard_or_mouse_are_skipped() {
        let doc = wrap(
            r#"<GalaxyMapOpen>
                 <Primary Device="ThrustMasterHOTAS4" Key="Joy_7" />
                 <Secondary Device="{NoDevice}" Key="" />
               </GalaxyMapOpen>
               <MouseSensitivity Value="1.0" />
               <YawAxisRaw>
                 <Binding Device="ThrustMasterHOTAS4" Key="Joy_XAxis" />
               </YawAxisRaw>"#,
        );

        let bindings = extract_bindings(&doc).expect("extract");

        assert!(bindings.is_empty(), "got {bindings:?}");
    }

    #[test]
    fn test_only_direct_children_of_root_are_commands() {
        let doc = wrap(
            r#"<Outer>
                 <Inner>
                   <Primary Device="Keyboard" Key="Key_A" />
                 </Inner>
               </Outer>"#,
        );

        let bindings = extract_bindings(&doc).expect("extract");

        assert!(!bindings.contains_key("Inner"));
        assert!(!bindings.contains_key("Outer"));
    }

    #[test]
    fn test_each_eligible_element_yields_exactly_one_record() {
        let doc = wrap(
            r#"<UseBoostJuice><Primary Device="Keyboard" Key="Key_Tab" /></UseBoostJuice>
               <Supercruise><Primary Device="Keyboard" Key="Key_J" /></Supercruise>
               <PrimaryFire><Primary Device="Mouse" Key="Mouse_1" /></PrimaryFire>
               <SecondaryFire><Primary Device="GamePad" Key="Pad_RTrigger" /></SecondaryFire>"#,
        );

        let bindings = extract_bindings(&doc).expect("extract");

        let names: Vec<&str> = bindings.keys().map(String::as_str).collect();
        assert_eq!(names, ["PrimaryFire", "Supercruise", "UseBoostJuice"]);
        for (name, record) in &bindings {
            assert_eq!(name, &record.name);
        }
    }

    #[test]
    fn test_malformed_document_returns_parse_error() {
        let result = extract_bindings("<Root><PrimaryFire></Root>");
        assert!(matches!(result, Err(ExtractError::Parse(_))));
    }

    #[test]
    fn test_document_without_root_returns_missing_root() {
        let result = extract_bindings(r#"<Bindings><PrimaryFire /></Bindings>"#);
        assert!(matches!(result, Err(ExtractError::MissingRoot)));
    }

    #[test]
    fn test_nested_root_element_is_found() {
        let doc = r#"<Wrapper><Root><Pause><Primary Device="Keyboard" Key="Key_P" /></Pause></Root></Wrapper>"#;

        let bindings = extract_bindings(doc).expect("extract");

        assert_eq!(bindings["Pause"].key, "Key_P");
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let doc = wrap(
            r#"<Pause><Primary Device="Keyboard" Key="Key_P" /></Pause>
               <PrimaryFire><Secondary Device="Mouse" Key="Mouse_2" /></PrimaryFire>"#,
        );

        let first = extract_bindings(&doc).expect("first");
        let second = extract_bindings(&doc).expect("second");

        assert_eq!(first, second);
    }
}
