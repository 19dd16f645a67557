// Thu Feb 5 2026 - Alex

use super::error::ReaderError;
use crate::model::{
    EnumDef, EnumMember, ModuleRegistry, StructDef, StructKind, StructMember, TypeDesc,
};
use serde::Deserialize;

const BASE_CLASS_PREFIX: &str = "baseclass_";

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawEnum {
    module: String,
    name: String,
    scope: String,
    width: u32,
    is_class: bool,
    // Key spelling is load-bearing, it is what the database files carry.
    #[serde(rename = "isHexademical")]
    is_hexadecimal: bool,
    is_signed: bool,
    is_bitfield: bool,
    comment: String,
    members: Vec<RawEnumMember>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawEnumMember {
    name: String,
    value: i64,
    comment: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawStruct {
    module: String,
    name: String,
    scope: String,
    kind: String,
    size: u32,
    alignment: u32,
    is_anonymous: bool,
    vtable_address: u64,
    vtable_size: u32,
    comment: String,
    members: Vec<RawStructMember>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawStructMember {
    name: String,
    #[serde(rename = "type")]
    type_name: String,
    raw_type: String,
    offset: u32,
    size: u32,
    is_anonymous: bool,
    is_base: bool,
    comment: String,
}

/// Read one enumeration description, appending it to its module (created
/// on first reference). Descriptions without a module name are ignored.
pub fn read_enum(registry: &mut ModuleRegistry, data: &str) -> Result<(), ReaderError> {
    let raw: RawEnum = serde_json::from_str(data)?;
    if raw.module.is_empty() {
        return Ok(());
    }
    let index = registry.find_or_create(&raw.module);

    let def = EnumDef {
        name: raw.name,
        scope: raw.scope,
        module_name: raw.module,
        width: raw.width,
        is_class: raw.is_class,
        is_hexadecimal: raw.is_hexadecimal,
        is_signed: raw.is_signed,
        is_bitfield: raw.is_bitfield,
        comment: raw.comment,
        members: raw
            .members
            .into_iter()
            .map(|m| EnumMember {
                name: m.name,
                value: m.value,
                comment: m.comment,
            })
            .collect(),
    };

    if let Some(module) = registry.get_mut(index) {
        module.enums.push(def);
    }
    Ok(())
}

/// Read one structure description. The parent is recorded only by name
/// here; linking happens after all modules are loaded.
pub fn read_struct(registry: &mut ModuleRegistry, data: &str) -> Result<(), ReaderError> {
    let raw: RawStruct = serde_json::from_str(data)?;
    if raw.module.is_empty() {
        return Ok(());
    }
    let index = registry.find_or_create(&raw.module);

    let mut def = StructDef::new(&raw.name, &raw.scope, &raw.module);
    def.kind = StructKind::from_tag(&raw.kind);
    def.size = raw.size;
    def.alignment = raw.alignment;
    def.is_anonymous = raw.is_anonymous;
    def.vtable_address = raw.vtable_address;
    def.has_vtable = raw.vtable_address != 0;
    def.vtable_size = raw.vtable_size;
    def.comment = raw.comment;

    for m in raw.members {
        let mut member = StructMember {
            name: m.name,
            type_desc: TypeDesc::parse(&effective_member_type(&m.raw_type, &m.type_name, m.size)),
            offset: m.offset,
            size: m.size,
            comment: m.comment,
            is_base: false,
            ignore: false,
        };
        if def.kind != StructKind::Union
            && member.offset == 0
            && (m.is_base || member.name.starts_with(BASE_CLASS_PREFIX))
        {
            member.is_base = true;
            def.parent_name = member.type_desc.name.clone();
        }
        if m.is_anonymous {
            member.name.clear();
        }
        def.members.push(member);
    }

    if let Some(module) = registry.get_mut(index) {
        module.structs.push(def);
    }
    Ok(())
}

/// Effective member type: prefer the custom raw type, fall back to the
/// declared type, else synthesize a primitive from the byte size.
fn effective_member_type(raw_type: &str, type_name: &str, size: u32) -> String {
    if !raw_type.is_empty() {
        return raw_type.to_string();
    }
    if !type_name.is_empty() {
        return type_name.to_string();
    }
    match size {
        1 => "char".to_string(),
        2 => "short".to_string(),
        4 => "int".to_string(),
        n => format!("char[{}]", n),
    }
}
