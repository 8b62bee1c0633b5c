/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Maps model shapes onto Rust types and decides which module each generated type lives in.
//!
//! Only shapes reachable from the selected operations are generated. Operation inputs land in
//! `input`, operation outputs that no other shape refers to land in `output`, and everything
//! else (nested structures and enums) lands in `model`.

use crate::error::CodegenError;
use crate::model::{Operation, ServiceModel, Shape, StructureShape};
use crate::naming;
use crate::settings::CodegenSettings;
use std::collections::{HashMap, HashSet};

/// Prelude names a generated type may not shadow.
const PRELUDE_NAMES: &[&str] = &[
    "AsMut", "AsRef", "Box", "Clone", "Copy", "Default", "Drop", "Eq", "Err", "Extend", "Fn",
    "FnMut", "FnOnce", "From", "Into", "IntoIterator", "Iterator", "None", "Ok", "Option", "Ord",
    "PartialEq", "PartialOrd", "Result", "Send", "Sized", "Some", "String", "Sync", "ToOwned",
    "ToString", "Vec",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RustType {
    String,
    Bool,
    I32,
    I64,
    F32,
    F64,
    Instant,
    Enum(String),
    Structure(String),
    List(Box<RustType>),
}

impl RustType {
    pub fn is_copy(&self) -> bool {
        matches!(
            self,
            RustType::Bool | RustType::I32 | RustType::I64 | RustType::F32 | RustType::F64
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, RustType::F32 | RustType::F64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeModule {
    Input,
    Output,
    Model,
}

impl ShapeModule {
    pub const ALL: [ShapeModule; 3] = [ShapeModule::Model, ShapeModule::Input, ShapeModule::Output];

    pub fn name(self) -> &'static str {
        match self {
            ShapeModule::Input => "input",
            ShapeModule::Output => "output",
            ShapeModule::Model => "model",
        }
    }
}

/// One structure member, resolved to its Rust names and type.
#[derive(Debug, Clone)]
pub struct MemberSymbol<'a> {
    pub model_name: &'a str,
    /// Field and accessor name, possibly a raw identifier.
    pub field: String,
    /// `field` without the `r#` prefix, for `set_`/`get_` names and debug output.
    pub plain: String,
    /// Parameter name on the EC2 query wire.
    pub wire_name: String,
    pub ty: RustType,
    pub sensitive: bool,
    pub documentation: Option<&'a str>,
}

pub struct SymbolProvider<'a> {
    model: &'a ServiceModel,
    settings: &'a CodegenSettings,
    operations: Vec<&'a Operation>,
    modules: HashMap<&'a str, ShapeModule>,
    nested: HashSet<&'a str>,
    serialized: HashSet<&'a str>,
    float_shapes: HashSet<&'a str>,
}

impl<'a> SymbolProvider<'a> {
    pub fn new(model: &'a ServiceModel, settings: &'a CodegenSettings) -> Result<Self, CodegenError> {
        if model.metadata.protocol != "ec2" {
            return Err(CodegenError::UnsupportedProtocol(
                model.metadata.protocol.clone(),
            ));
        }
        let operations = select_operations(model, settings)?;

        let mut walker = Walker {
            model,
            generated: HashSet::new(),
            nested: HashSet::new(),
            serialized: HashSet::new(),
            stack: Vec::new(),
        };
        let mut inputs = HashSet::new();
        let mut outputs = HashSet::new();
        for operation in &operations {
            if let Some(input) = &operation.input {
                walker.visit_structure(&input.shape, &operation.name, true)?;
                inputs.insert(input.shape.as_str());
            }
            if let Some(output) = &operation.output {
                walker.visit_structure(&output.shape, &operation.name, false)?;
                outputs.insert(output.shape.as_str());
            }
        }

        let mut modules = HashMap::new();
        for name in &walker.generated {
            if PRELUDE_NAMES.contains(name) {
                return Err(CodegenError::ReservedShapeName(name.to_string()));
            }
            let module = if inputs.contains(name) {
                ShapeModule::Input
            } else if outputs.contains(name) && !walker.nested.contains(name) {
                ShapeModule::Output
            } else {
                ShapeModule::Model
            };
            modules.insert(*name, module);
        }

        let mut provider = SymbolProvider {
            model,
            settings,
            operations,
            modules,
            nested: walker.nested,
            serialized: walker.serialized,
            float_shapes: HashSet::new(),
        };
        provider.float_shapes = provider.find_float_shapes()?;
        Ok(provider)
    }

    pub fn model(&self) -> &'a ServiceModel {
        self.model
    }

    pub fn settings(&self) -> &'a CodegenSettings {
        self.settings
    }

    pub fn include_docs(&self) -> bool {
        self.settings.codegen.include_documentation
    }

    pub fn operations(&self) -> &[&'a Operation] {
        &self.operations
    }

    /// Generated shapes placed in `module`, in model order.
    pub fn shapes_in(&self, module: ShapeModule) -> Vec<(&'a str, &'a Shape)> {
        self.model
            .shapes
            .iter()
            .filter(|(name, _)| self.modules.get(name.as_str()) == Some(&module))
            .map(|(name, shape)| (name.as_str(), shape))
            .collect()
    }

    pub fn module_of(&self, shape_name: &str) -> ShapeModule {
        self.modules
            .get(shape_name)
            .copied()
            .unwrap_or(ShapeModule::Model)
    }

    /// Absolute path of the generated type, e.g. `crate::model::Tag`.
    pub fn shape_path(&self, shape_name: &str) -> String {
        format!(
            "crate::{}::{}",
            self.module_of(shape_name).name(),
            type_name(shape_name)
        )
    }

    /// Absolute path of the builder module, e.g. `crate::model::tag`.
    pub fn builder_module_path(&self, shape_name: &str) -> String {
        format!(
            "crate::{}::{}",
            self.module_of(shape_name).name(),
            naming::builder_module_name(shape_name)
        )
    }

    /// Whether the structure is written to the query wire as part of some operation input.
    pub fn is_serialized(&self, shape_name: &str) -> bool {
        self.serialized.contains(shape_name)
    }

    /// Whether some structure member targets this structure.
    pub fn is_nested(&self, shape_name: &str) -> bool {
        self.nested.contains(shape_name)
    }

    /// Whether the structure holds a float anywhere below it, which rules out `Eq` and a derived `Hash`.
    pub fn contains_float(&self, shape_name: &str) -> bool {
        self.float_shapes.contains(shape_name)
    }

    pub fn rust_type(&self, target: &str, referenced_by: &str) -> Result<RustType, CodegenError> {
        let ty = match self.model.shape(target, referenced_by)? {
            Shape::String(shape) if shape.is_enum() => RustType::Enum(target.to_owned()),
            Shape::String(_) => RustType::String,
            Shape::Boolean(_) => RustType::Bool,
            Shape::Integer(_) => RustType::I32,
            Shape::Long(_) => RustType::I64,
            Shape::Float(_) => RustType::F32,
            Shape::Double(_) => RustType::F64,
            Shape::Timestamp(_) => RustType::Instant,
            Shape::Structure(_) => RustType::Structure(target.to_owned()),
            Shape::List(list) => {
                let member = self.rust_type(&list.member.shape, target)?;
                if let RustType::List(_) = member {
                    return Err(CodegenError::UnsupportedShape {
                        shape: target.to_owned(),
                        kind: "list of lists",
                    });
                }
                RustType::List(Box::new(member))
            }
            other @ (Shape::Blob(_) | Shape::Map(_)) => {
                return Err(CodegenError::UnsupportedShape {
                    shape: target.to_owned(),
                    kind: other.kind(),
                })
            }
        };
        Ok(ty)
    }

    /// Renders `ty` as a fully qualified Rust type.
    pub fn render(&self, ty: &RustType) -> String {
        match ty {
            RustType::String => "std::string::String".to_owned(),
            RustType::Bool => "bool".to_owned(),
            RustType::I32 => "i32".to_owned(),
            RustType::I64 => "i64".to_owned(),
            RustType::F32 => "f32".to_owned(),
            RustType::F64 => "f64".to_owned(),
            RustType::Instant => format!("{}::Instant", self.settings.runtime.types_crate),
            RustType::Enum(name) | RustType::Structure(name) => self.shape_path(name),
            RustType::List(member) => format!("std::vec::Vec<{}>", self.render(member)),
        }
    }

    pub fn members(
        &self,
        shape_name: &str,
        structure: &'a StructureShape,
    ) -> Result<Vec<MemberSymbol<'a>>, CodegenError> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        let mut members = Vec::with_capacity(structure.members.len());
        for (model_name, member) in &structure.members {
            let field = naming::member_name(model_name);
            let plain = naming::unescaped(&field).to_owned();
            if plain == "builder" || plain == "build" {
                return Err(CodegenError::MemberNameCollision {
                    shape: shape_name.to_owned(),
                    rust_name: plain,
                    first: model_name.clone(),
                    second: "<generated method>".to_owned(),
                });
            }
            if let Some(first) = seen.insert(plain.clone(), model_name.as_str()) {
                return Err(CodegenError::MemberNameCollision {
                    shape: shape_name.to_owned(),
                    rust_name: plain,
                    first: first.to_owned(),
                    second: model_name.clone(),
                });
            }
            let referenced_by = format!("{}${}", shape_name, model_name);
            let ty = self.rust_type(&member.shape, &referenced_by)?;
            let sensitive = self.is_sensitive(&member.shape, &referenced_by)?;
            members.push(MemberSymbol {
                model_name: model_name.as_str(),
                field,
                plain,
                wire_name: wire_name(
                    model_name,
                    member.location_name.as_deref(),
                    member.query_name.as_deref(),
                ),
                ty,
                sensitive,
                documentation: member.documentation.as_deref(),
            });
        }
        Ok(members)
    }

    fn is_sensitive(&self, target: &str, referenced_by: &str) -> Result<bool, CodegenError> {
        Ok(match self.model.shape(target, referenced_by)? {
            Shape::List(list) => self.model.shape(&list.member.shape, target)?.is_sensitive(),
            other => other.is_sensitive(),
        })
    }

    fn find_float_shapes(&self) -> Result<HashSet<&'a str>, CodegenError> {
        let mut memo = HashMap::new();
        for name in self.modules.keys() {
            self.has_float(*name, &mut memo)?;
        }
        Ok(memo
            .into_iter()
            .filter_map(|(name, has_float)| has_float.then(|| name))
            .collect())
    }

    fn has_float(
        &self,
        name: &'a str,
        memo: &mut HashMap<&'a str, bool>,
    ) -> Result<bool, CodegenError> {
        if let Some(known) = memo.get(name) {
            return Ok(*known);
        }
        let structure = match self.model.shape(name, name)? {
            Shape::Structure(structure) => structure,
            _ => return Ok(false),
        };
        let mut found = false;
        for (member_name, member) in &structure.members {
            // lists are looked through to their element shape
            let target: &'a str = match self.model.shape(&member.shape, member_name)? {
                Shape::List(list) => list.member.shape.as_str(),
                _ => member.shape.as_str(),
            };
            found = match self.rust_type(target, member_name)? {
                ty if ty.is_float() => true,
                RustType::Structure(_) => self.has_float(target, memo)?,
                _ => false,
            };
            if found {
                break;
            }
        }
        memo.insert(name, found);
        Ok(found)
    }
}

/// Rust type name for a shape. Model names are already PascalCase; anything else is converted.
pub fn type_name(shape_name: &str) -> String {
    let valid = shape_name
        .chars()
        .next()
        .map_or(false, |c| c.is_ascii_uppercase())
        && shape_name.chars().all(|c| c.is_ascii_alphanumeric());
    if valid {
        shape_name.to_owned()
    } else {
        naming::to_pascal_case(shape_name)
    }
}

/// EC2 query parameter name: `queryName`, else `locationName` capitalized, else the member name.
pub fn wire_name(member_name: &str, location_name: Option<&str>, query_name: Option<&str>) -> String {
    if let Some(query_name) = query_name {
        return query_name.to_owned();
    }
    match location_name {
        Some(location_name) => {
            let mut chars = location_name.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => member_name.to_owned(),
            }
        }
        None => member_name.to_owned(),
    }
}

fn select_operations<'a>(
    model: &'a ServiceModel,
    settings: &CodegenSettings,
) -> Result<Vec<&'a Operation>, CodegenError> {
    match &settings.codegen.operations {
        None => Ok(model.operations.values().collect()),
        Some(names) => names
            .iter()
            .map(|name| {
                model
                    .operations
                    .get(name)
                    .ok_or_else(|| CodegenError::UnknownOperation(name.clone()))
            })
            .collect(),
    }
}

struct Walker<'a> {
    model: &'a ServiceModel,
    generated: HashSet<&'a str>,
    nested: HashSet<&'a str>,
    serialized: HashSet<&'a str>,
    stack: Vec<&'a str>,
}

impl<'a> Walker<'a> {
    fn visit_structure(
        &mut self,
        name: &'a str,
        referenced_by: &str,
        serialize: bool,
    ) -> Result<(), CodegenError> {
        if self.stack.contains(&name) {
            return Err(CodegenError::RecursiveShape(name.to_owned()));
        }
        let first_visit = self.generated.insert(name);
        let needs_serializer = serialize && self.serialized.insert(name);
        if !first_visit && !needs_serializer {
            return Ok(());
        }
        let structure = match self.model.shape(name, referenced_by)? {
            Shape::Structure(structure) => structure,
            other => {
                return Err(CodegenError::UnsupportedShape {
                    shape: name.to_owned(),
                    kind: other.kind(),
                })
            }
        };
        self.stack.push(name);
        for (member_name, member) in &structure.members {
            let referenced_by = format!("{}${}", name, member_name);
            self.visit_target(&member.shape, &referenced_by, serialize)?;
        }
        self.stack.pop();
        Ok(())
    }

    fn visit_target(
        &mut self,
        target: &'a str,
        referenced_by: &str,
        serialize: bool,
    ) -> Result<(), CodegenError> {
        match self.model.shape(target, referenced_by)? {
            Shape::Structure(_) => {
                self.nested.insert(target);
                self.visit_structure(target, referenced_by, serialize)
            }
            Shape::List(list) => self.visit_target(&list.member.shape, target, serialize),
            Shape::String(shape) if shape.is_enum() => {
                self.generated.insert(target);
                Ok(())
            }
            other @ (Shape::Blob(_) | Shape::Map(_)) => Err(CodegenError::UnsupportedShape {
                shape: target.to_owned(),
                kind: other.kind(),
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{wire_name, RustType, ShapeModule, SymbolProvider};
    use crate::error::CodegenError;
    use crate::model::{ServiceModel, Shape};
    use crate::settings::CodegenSettings;

    fn model(shapes: &str, operations: &str) -> ServiceModel {
        ServiceModel::from_json(&format!(
            r#"{{
                "metadata": {{
                    "apiVersion": "2016-11-15",
                    "endpointPrefix": "ec2",
                    "protocol": "ec2",
                    "serviceFullName": "Amazon Elastic Compute Cloud"
                }},
                "operations": {{ {} }},
                "shapes": {{ {} }}
            }}"#,
            operations, shapes
        ))
        .unwrap()
    }

    const SHAPES: &str = r#"
        "String": {"type": "string"},
        "Integer": {"type": "integer"},
        "Double": {"type": "double"},
        "Secret": {"type": "string", "sensitive": true},
        "VolumeType": {"type": "string", "enum": ["gp2", "io1"]},
        "Tag": {"type": "structure", "members": {"Key": {"shape": "String"}}},
        "TagList": {"type": "list", "member": {"shape": "Tag", "locationName": "item"}},
        "Price": {"type": "structure", "members": {"Amount": {"shape": "Double"}}},
        "Volume": {"type": "structure", "members": {
            "Tags": {"shape": "TagList", "locationName": "tagSet"},
            "Price": {"shape": "Price"}
        }},
        "VolumeList": {"type": "list", "member": {"shape": "Volume"}},
        "CreateVolumeRequest": {"type": "structure", "members": {
            "Size": {"shape": "Integer"},
            "VolumeType": {"shape": "VolumeType"},
            "Key": {"shape": "Secret"},
            "TagSpecification": {"shape": "TagList", "locationName": "TagSpecification"}
        }},
        "DescribeVolumesRequest": {"type": "structure", "members": {}},
        "DescribeVolumesResult": {"type": "structure", "members": {
            "Volumes": {"shape": "VolumeList", "locationName": "volumeSet"}
        }}
    "#;

    const OPERATIONS: &str = r#"
        "CreateVolume": {"name": "CreateVolume", "input": {"shape": "CreateVolumeRequest"}, "output": {"shape": "Volume"}},
        "DescribeVolumes": {"name": "DescribeVolumes", "input": {"shape": "DescribeVolumesRequest"}, "output": {"shape": "DescribeVolumesResult"}}
    "#;

    #[test]
    fn module_placement() {
        let model = model(SHAPES, OPERATIONS);
        let settings = CodegenSettings::default();
        let symbols = SymbolProvider::new(&model, &settings).unwrap();
        assert_eq!(symbols.module_of("CreateVolumeRequest"), ShapeModule::Input);
        assert_eq!(symbols.module_of("DescribeVolumesResult"), ShapeModule::Output);
        // `Volume` is an output but also nested inside `DescribeVolumesResult`
        assert_eq!(symbols.module_of("Volume"), ShapeModule::Model);
        assert_eq!(symbols.module_of("VolumeType"), ShapeModule::Model);
        assert_eq!(symbols.shape_path("Tag"), "crate::model::Tag");
        assert_eq!(
            symbols.builder_module_path("CreateVolumeRequest"),
            "crate::input::create_volume_request"
        );
        let inputs: Vec<_> = symbols
            .shapes_in(ShapeModule::Input)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(inputs, vec!["CreateVolumeRequest", "DescribeVolumesRequest"]);
    }

    #[test]
    fn serializers_only_for_input_closure() {
        let model = model(SHAPES, OPERATIONS);
        let settings = CodegenSettings::default();
        let symbols = SymbolProvider::new(&model, &settings).unwrap();
        assert!(symbols.is_serialized("CreateVolumeRequest"));
        assert!(symbols.is_serialized("Tag"));
        assert!(!symbols.is_serialized("Volume"));
        assert!(!symbols.is_serialized("Price"));
        assert!(symbols.is_nested("Tag"));
        assert!(!symbols.is_nested("CreateVolumeRequest"));
    }

    #[test]
    fn floats_propagate_through_nesting() {
        let model = model(SHAPES, OPERATIONS);
        let settings = CodegenSettings::default();
        let symbols = SymbolProvider::new(&model, &settings).unwrap();
        assert!(symbols.contains_float("Price"));
        assert!(symbols.contains_float("Volume"));
        assert!(symbols.contains_float("DescribeVolumesResult"));
        assert!(!symbols.contains_float("Tag"));
        assert!(!symbols.contains_float("CreateVolumeRequest"));
    }

    #[test]
    fn member_symbols() {
        let model = model(SHAPES, OPERATIONS);
        let settings = CodegenSettings::default();
        let symbols = SymbolProvider::new(&model, &settings).unwrap();
        let structure = match &model.shapes["CreateVolumeRequest"] {
            Shape::Structure(structure) => structure,
            _ => unreachable!(),
        };
        let members = symbols.members("CreateVolumeRequest", structure).unwrap();
        let fields: Vec<_> = members.iter().map(|m| m.field.as_str()).collect();
        assert_eq!(fields, vec!["size", "volume_type", "key", "tag_specification"]);
        assert_eq!(members[1].ty, RustType::Enum("VolumeType".into()));
        assert!(members[2].sensitive);
        assert_eq!(
            symbols.render(&members[3].ty),
            "std::vec::Vec<crate::model::Tag>"
        );
        assert_eq!(members[3].wire_name, "TagSpecification");
    }

    #[test]
    fn wire_names() {
        assert_eq!(wire_name("DryRun", Some("dryRun"), None), "DryRun");
        assert_eq!(wire_name("InstanceIds", Some("InstanceId"), None), "InstanceId");
        assert_eq!(wire_name("Filters", None, Some("Filter")), "Filter");
        assert_eq!(wire_name("Size", None, None), "Size");
    }

    #[test]
    fn selected_operations_limit_generation() {
        let model = model(SHAPES, OPERATIONS);
        let settings = CodegenSettings::from_toml("[codegen]\noperations = [\"DescribeVolumes\"]\n").unwrap();
        let symbols = SymbolProvider::new(&model, &settings).unwrap();
        assert!(symbols.shapes_in(ShapeModule::Input).iter().all(|(name, _)| *name == "DescribeVolumesRequest"));

        let settings = CodegenSettings::from_toml("[codegen]\noperations = [\"Nope\"]\n").unwrap();
        assert!(matches!(
            SymbolProvider::new(&model, &settings),
            Err(CodegenError::UnknownOperation(name)) if name == "Nope"
        ));
    }

    #[test]
    fn unsupported_and_unknown_shapes() {
        let settings = CodegenSettings::default();
        let unknown = model(
            r#""Request": {"type": "structure", "members": {"Missing": {"shape": "Nowhere"}}}"#,
            r#""Op": {"name": "Op", "input": {"shape": "Request"}}"#,
        );
        assert!(matches!(
            SymbolProvider::new(&unknown, &settings),
            Err(CodegenError::UnknownShape { name, referenced_by })
                if name == "Nowhere" && referenced_by == "Request$Missing"
        ));

        let blob = model(
            r#""Blob": {"type": "blob"},
               "Request": {"type": "structure", "members": {"Data": {"shape": "Blob"}}}"#,
            r#""Op": {"name": "Op", "input": {"shape": "Request"}}"#,
        );
        assert!(matches!(
            SymbolProvider::new(&blob, &settings),
            Err(CodegenError::UnsupportedShape { kind: "blob", .. })
        ));

        let recursive = model(
            r#""Node": {"type": "structure", "members": {"Next": {"shape": "Node"}}}"#,
            r#""Op": {"name": "Op", "input": {"shape": "Node"}}"#,
        );
        assert!(matches!(
            SymbolProvider::new(&recursive, &settings),
            Err(CodegenError::RecursiveShape(name)) if name == "Node"
        ));

        let reserved = model(
            r#""Option": {"type": "structure", "members": {}}"#,
            r#""Op": {"name": "Op", "input": {"shape": "Option"}}"#,
        );
        assert!(matches!(
            SymbolProvider::new(&reserved, &settings),
            Err(CodegenError::ReservedShapeName(name)) if name == "Option"
        ));
    }
}
