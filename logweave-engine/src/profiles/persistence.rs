//! XML persistence for profiles.
//!
//! Format: a `<profiles version="...">` root element; one `<profile>`
//! element per profile carrying `id`/`title`/`name`/`version` attributes;
//! child `<setting>` elements carry `key` and `type` attributes
//! (`String` | `Integer` | `Boolean` | `List`), with list settings holding
//! `<item>` children. Malformed scalar values decode to the type-specific
//! fallback (empty string / 0 / false), never an error.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};

use logweave_core::constants::PROFILE_STORE_VERSION;
use logweave_core::errors::ProfileError;
use logweave_core::types::FxHashMap;

use super::model::{Profile, ProfileOwner, SettingValue};

fn xml_err<E: std::fmt::Display>(e: E) -> ProfileError {
    ProfileError::Xml {
        message: e.to_string(),
    }
}

/// Decode profiles from an XML document.
pub fn read_profiles(xml: &str) -> Result<Vec<Profile>, ProfileError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    reader.config_mut().check_end_names = true;

    let mut profiles = Vec::new();
    let mut current: Option<Profile> = None;
    let mut setting_key: Option<String> = None;
    let mut setting_type = String::new();
    let mut text = String::new();
    let mut items: Vec<String> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"profile" => current = Some(profile_from_attrs(&e)?),
                b"setting" => {
                    let (key, ty) = setting_attrs(&e)?;
                    setting_key = Some(key);
                    setting_type = ty;
                    text.clear();
                    items.clear();
                }
                b"item" => text.clear(),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"profile" => profiles.push(profile_from_attrs(&e)?),
                b"setting" => {
                    if let Some(profile) = current.as_mut() {
                        let (key, ty) = setting_attrs(&e)?;
                        profile.settings.insert(key, decode_value(&ty, "", &[]));
                    }
                }
                b"item" => items.push(String::new()),
                _ => {}
            },
            Ok(Event::Text(t)) => text.push_str(&t.unescape().map_err(xml_err)?),
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"item" => items.push(std::mem::take(&mut text)),
                b"setting" => {
                    if let (Some(profile), Some(key)) = (current.as_mut(), setting_key.take()) {
                        profile
                            .settings
                            .insert(key, decode_value(&setting_type, &text, &items));
                    }
                    text.clear();
                    items.clear();
                }
                b"profile" => {
                    if let Some(profile) = current.take() {
                        profiles.push(profile);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(xml_err(e)),
        }
    }
    Ok(profiles)
}

fn profile_from_attrs(e: &BytesStart) -> Result<Profile, ProfileError> {
    let mut owner = ProfileOwner::User;
    let mut name = String::new();
    let mut title = String::new();
    let mut version = 0u32;
    for attr in e.attributes() {
        let attr = attr.map_err(xml_err)?;
        let value = attr.unescape_value().map_err(xml_err)?.into_owned();
        match attr.key.as_ref() {
            b"id" => {
                owner = if value == "BuiltIn" {
                    ProfileOwner::BuiltIn
                } else {
                    ProfileOwner::User
                }
            }
            b"name" => name = value,
            b"title" => title = value,
            b"version" => version = value.parse().unwrap_or(0),
            _ => {}
        }
    }
    Ok(Profile {
        owner,
        name,
        title,
        version,
        settings: FxHashMap::default(),
    })
}

fn setting_attrs(e: &BytesStart) -> Result<(String, String), ProfileError> {
    let mut key = String::new();
    let mut ty = String::new();
    for attr in e.attributes() {
        let attr = attr.map_err(xml_err)?;
        let value = attr.unescape_value().map_err(xml_err)?.into_owned();
        match attr.key.as_ref() {
            b"key" => key = value,
            b"type" => ty = value,
            _ => {}
        }
    }
    Ok((key, ty))
}

fn decode_value(ty: &str, text: &str, items: &[String]) -> SettingValue {
    match ty {
        "Integer" => SettingValue::Int(text.trim().parse().unwrap_or(0)),
        "Boolean" => SettingValue::Bool(text.trim() == "true"),
        "List" => SettingValue::List(items.to_vec()),
        // Unknown types fall back to a plain string.
        _ => SettingValue::Str(text.to_string()),
    }
}

/// Encode profiles as an XML document.
pub fn write_profiles<'a, I>(profiles: I) -> Result<String, ProfileError>
where
    I: IntoIterator<Item = &'a Profile>,
{
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_err)?;

    let mut root = BytesStart::new("profiles");
    let store_version = PROFILE_STORE_VERSION.to_string();
    root.push_attribute(("version", store_version.as_str()));
    writer.write_event(Event::Start(root)).map_err(xml_err)?;

    for profile in profiles {
        let mut el = BytesStart::new("profile");
        el.push_attribute(("id", profile.owner.as_str()));
        el.push_attribute(("title", profile.title.as_str()));
        el.push_attribute(("name", profile.name.as_str()));
        let profile_version = profile.version.to_string();
        el.push_attribute(("version", profile_version.as_str()));
        writer.write_event(Event::Start(el)).map_err(xml_err)?;

        // Deterministic order keeps the store diffable.
        let mut setting_keys: Vec<&String> = profile.settings.keys().collect();
        setting_keys.sort();
        for key in setting_keys {
            let value = &profile.settings[key];
            let mut setting = BytesStart::new("setting");
            setting.push_attribute(("key", key.as_str()));
            setting.push_attribute(("type", value.type_name()));
            writer.write_event(Event::Start(setting)).map_err(xml_err)?;
            match value {
                SettingValue::List(list) => {
                    for item in list {
                        write_text_element(&mut writer, "item", item)?;
                    }
                }
                SettingValue::Str(s) => write_text(&mut writer, s)?,
                SettingValue::Int(i) => write_text(&mut writer, &i.to_string())?,
                SettingValue::Bool(b) => write_text(&mut writer, &b.to_string())?,
            }
            writer
                .write_event(Event::End(BytesEnd::new("setting")))
                .map_err(xml_err)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new("profile")))
            .map_err(xml_err)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("profiles")))
        .map_err(xml_err)?;

    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).map_err(xml_err)
}

fn write_text(writer: &mut Writer<Cursor<Vec<u8>>>, text: &str) -> Result<(), ProfileError> {
    writer
        .write_event(Event::Text(quick_xml::events::BytesText::new(text)))
        .map_err(xml_err)
}

fn write_text_element(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    tag: &str,
    text: &str,
) -> Result<(), ProfileError> {
    writer
        .write_event(Event::Start(BytesStart::new(tag)))
        .map_err(xml_err)?;
    write_text(writer, text)?;
    writer
        .write_event(Event::End(BytesEnd::new(tag)))
        .map_err(xml_err)
}

/// Read profiles from a file.
pub fn read_profiles_file(path: &Path) -> Result<Vec<Profile>, ProfileError> {
    let text = fs::read_to_string(path).map_err(|e| ProfileError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    read_profiles(&text)
}

/// Write profiles to a file.
pub fn write_profiles_file<'a, I>(path: &Path, profiles: I) -> Result<(), ProfileError>
where
    I: IntoIterator<Item = &'a Profile>,
{
    let xml = write_profiles(profiles)?;
    fs::write(path, xml).map_err(|e| ProfileError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
