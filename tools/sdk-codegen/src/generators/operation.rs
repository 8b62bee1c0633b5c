/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::generators::query_ser::operation_fn_name;
use crate::generators::{write_docs, GENERATED_HEADER};
use crate::symbol::{self, SymbolProvider};
use crate::writer::RustWriter;

/// Renders the service constants and one marker type per operation that ties its input and
/// output shapes to the query serializer.
pub fn render(symbols: &SymbolProvider<'_>) -> String {
    let metadata = &symbols.model().metadata;
    let mut writer = RustWriter::new();
    writer.line(GENERATED_HEADER);
    writer.line("/// API version sent as the `Version` parameter of every request.");
    writer.line(format!("pub const API_VERSION: &str = {:?};", metadata.api_version));
    writer.line("/// Prefix of the regional service endpoint host name.");
    writer.line(format!(
        "pub const ENDPOINT_PREFIX: &str = {:?};",
        metadata.endpoint_prefix
    ));

    for operation in symbols.operations() {
        let type_name = symbol::type_name(&operation.name);
        writer.blank();
        write_docs(&mut writer, symbols, operation.documentation.as_deref());
        writer.line("#[derive(std::clone::Clone, std::default::Default, std::fmt::Debug)]");
        writer.open(format!("pub struct {} {{", type_name));
        writer.line("_private: (),");
        writer.close("}");
        writer.open(format!("impl {} {{", type_name));
        writer.line(format!("/// Creates a new `{}` operation.", type_name));
        writer.open("pub fn new() -> Self {");
        writer.line("Self { _private: () }");
        writer.close("}");
        writer.close("}");
        writer.open(format!(
            "impl crate::operation::OperationShape for {} {{",
            type_name
        ));
        writer.line(format!("const NAME: &'static str = {:?};", operation.name));
        let input = operation
            .input
            .as_ref()
            .map_or_else(|| "()".to_owned(), |input| symbols.shape_path(&input.shape));
        let output = operation
            .output
            .as_ref()
            .map_or_else(|| "()".to_owned(), |output| symbols.shape_path(&output.shape));
        writer.line(format!("type Input = {};", input));
        writer.line(format!("type Output = {};", output));
        writer.open("fn serialize_input(input: &Self::Input) -> std::string::String {");
        writer.line(format!(
            "crate::query_ser::{}(input)",
            operation_fn_name(&operation.name)
        ));
        writer.close("}");
        writer.close("}");
    }
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::model::ServiceModel;
    use crate::settings::CodegenSettings;
    use crate::symbol::SymbolProvider;
    use pretty_assertions::assert_eq;

    #[test]
    fn operation_text() {
        let model = ServiceModel::from_json(
            r#"{
                "metadata": {"apiVersion": "2016-11-15", "endpointPrefix": "ec2", "protocol": "ec2", "serviceFullName": "EC2"},
                "operations": {
                    "DeleteVolume": {
                        "name": "DeleteVolume",
                        "http": {"method": "POST", "requestUri": "/"},
                        "input": {"shape": "DeleteVolumeRequest"},
                        "documentation": "<p>Deletes the specified EBS volume.</p>"
                    }
                },
                "shapes": {
                    "String": {"type": "string"},
                    "DeleteVolumeRequest": {"type": "structure", "members": {"VolumeId": {"shape": "String"}}}
                }
            }"#,
        )
        .unwrap();
        let settings = CodegenSettings::default();
        let symbols = SymbolProvider::new(&model, &settings).unwrap();
        let expected = r#"// Code generated by sdk-codegen. DO NOT EDIT.
/// API version sent as the `Version` parameter of every request.
pub const API_VERSION: &str = "2016-11-15";
/// Prefix of the regional service endpoint host name.
pub const ENDPOINT_PREFIX: &str = "ec2";

/// <p>Deletes the specified EBS volume.</p>
#[derive(std::clone::Clone, std::default::Default, std::fmt::Debug)]
pub struct DeleteVolume {
    _private: (),
}
impl DeleteVolume {
    /// Creates a new `DeleteVolume` operation.
    pub fn new() -> Self {
        Self { _private: () }
    }
}
impl crate::operation::OperationShape for DeleteVolume {
    const NAME: &'static str = "DeleteVolume";
    type Input = crate::input::DeleteVolumeRequest;
    type Output = ();
    fn serialize_input(input: &Self::Input) -> std::string::String {
        crate::query_ser::serialize_operation_delete_volume(input)
    }
}
"#;
        assert_eq!(expected, render(&symbols));
    }
}
