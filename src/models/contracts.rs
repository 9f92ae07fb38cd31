use serde::Serialize;

use crate::error::Result;
use crate::utils::fields::Fields;

/// One entry of a `getsourcecode` lookup. Values are kept exactly as sent;
/// `abi` is the raw ABI JSON text (or the "not verified" notice).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractSourceCode {
    #[serde(rename = "SourceCode")]
    pub source_code: String,
    #[serde(rename = "ABI")]
    pub abi: String,
    #[serde(rename = "ContractName")]
    pub contract_name: String,
    #[serde(rename = "CompilerVersion")]
    pub compiler_version: String,
    #[serde(rename = "OptimizationUsed")]
    pub optimization_used: String,
    #[serde(rename = "ConstructorArguments")]
    pub constructor_arguments: String,
    #[serde(rename = "EVMVersion")]
    pub evm_version: String,
    #[serde(rename = "Proxy")]
    pub proxy: String,
    #[serde(rename = "LicenseType")]
    pub license_type: String,
}

impl ContractSourceCode {
    pub fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            source_code: fields.required_string("SourceCode")?,
            abi: fields.required_string("ABI")?,
            contract_name: fields.required_string("ContractName")?,
            compiler_version: fields.required_string("CompilerVersion")?,
            optimization_used: fields.required_string("OptimizationUsed")?,
            constructor_arguments: fields.required_string("ConstructorArguments")?,
            evm_version: fields.required_string("EVMVersion")?,
            proxy: fields.required_string("Proxy")?,
            license_type: fields.required_string("LicenseType")?,
        })
    }
}
