//! Declarative deployment module for the Eduble contract.
//!
//! A [`DeploymentModule`] is a pure description of what to deploy: a list of
//! contract instantiation steps plus a mapping of exported handles. It is
//! never executed here; an external orchestrator walks the steps, performs
//! the actual deployments, and resolves each exported handle to an on-chain
//! instance.

use std::collections::BTreeMap;

use json::JsonValue;

/// Opaque reference to a contract instance declared inside a module.
///
/// Exported handles let composing modules and downstream tooling refer to
/// the instance an orchestrator will eventually deploy for this step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractHandle {
    /// Name of the contract this handle refers to
    contract: String,
    /// Index of the backing instantiation step within the module
    step: usize,
}

impl ContractHandle {
    /// Name of the contract this handle refers to
    pub fn contract_name(&self) -> &str {
        &self.contract
    }

    /// Index of the backing instantiation step within the module
    pub fn step_index(&self) -> usize {
        self.step
    }
}

/// A single contract instantiation step recorded by the builder.
#[derive(Debug, Clone)]
pub struct ContractStep {
    /// Name of the contract artifact to instantiate
    pub contract: String,
    /// Constructor arguments passed at instantiation
    pub constructor_args: Vec<JsonValue>,
}

/// Builder handed to the module definition closure.
#[derive(Debug, Default)]
pub struct ModuleBuilder {
    /// Steps recorded so far, in declaration order
    steps: Vec<ContractStep>,
}

impl ModuleBuilder {
    /// Declare a contract instantiation with no constructor arguments.
    pub fn contract(&mut self, name: &str) -> ContractHandle {
        self.contract_with_args(name, Vec::new())
    }

    /// Declare a contract instantiation with the given constructor arguments.
    pub fn contract_with_args(&mut self, name: &str, args: Vec<JsonValue>) -> ContractHandle {
        let step = self.steps.len();
        self.steps.push(ContractStep {
            contract: name.to_string(),
            constructor_args: args,
        });
        ContractHandle {
            contract: name.to_string(),
            step,
        }
    }
}

/// A named deployment module: instantiation steps plus exported handles.
#[derive(Debug)]
pub struct DeploymentModule {
    /// Unique module name
    name: String,
    /// Instantiation steps, in declaration order
    steps: Vec<ContractStep>,
    /// Handles exported to composing modules and tooling, by stable key
    exports: BTreeMap<String, ContractHandle>,
}

impl DeploymentModule {
    /// Unique module name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Instantiation steps, in declaration order
    pub fn steps(&self) -> &[ContractStep] {
        &self.steps
    }

    /// Handles exported by this module, keyed by their stable export name
    pub fn exports(&self) -> &BTreeMap<String, ContractHandle> {
        &self.exports
    }
}

/// Build a named deployment module from a definition closure.
///
/// The closure declares contracts through the builder and returns the
/// mapping of handles the module exports.
pub fn build_module<F>(name: &str, define: F) -> DeploymentModule
where
    F: FnOnce(&mut ModuleBuilder) -> BTreeMap<String, ContractHandle>,
{
    let mut builder = ModuleBuilder::default();
    let exports = define(&mut builder);
    DeploymentModule {
        name: name.to_string(),
        steps: builder.steps,
        exports,
    }
}

/// The Eduble deployment module: a single instance, no constructor arguments.
pub fn eduble_module() -> DeploymentModule {
    build_module("EdublModule", |m| {
        let eduble = m.contract("Eduble");

        BTreeMap::from([("eduble".to_string(), eduble)])
    })
}

#[cfg(test)]
#[allow(clippy::missing_docs_in_private_items)]
mod tests {
    use alloy::primitives::Address;

    use super::*;

    /// Minimal stand-in for the external orchestrator: walks the steps and
    /// assigns each one a synthetic address, then resolves the exports.
    fn evaluate(module: &DeploymentModule) -> BTreeMap<String, Address> {
        let addresses: Vec<Address> = module
            .steps()
            .iter()
            .enumerate()
            .map(|(i, _)| Address::with_last_byte(i as u8 + 1))
            .collect();

        module
            .exports()
            .iter()
            .map(|(key, handle)| (key.clone(), addresses[handle.step_index()]))
            .collect()
    }

    #[test]
    fn eduble_module_registers_a_single_step() {
        let module = eduble_module();

        assert_eq!(module.name(), "EdublModule");
        assert_eq!(module.steps().len(), 1);
        assert_eq!(module.steps()[0].contract, "Eduble");
        assert!(module.steps()[0].constructor_args.is_empty());
    }

    #[test]
    fn eduble_module_exports_exactly_one_handle() {
        let module = eduble_module();

        assert_eq!(module.exports().len(), 1);
        let handle = &module.exports()["eduble"];
        assert_eq!(handle.contract_name(), "Eduble");
        assert_eq!(handle.step_index(), 0);
    }

    #[test]
    fn mock_orchestrator_resolves_the_exported_handle() {
        let module = eduble_module();
        let resolved = evaluate(&module);

        assert_eq!(resolved.len(), 1);
        assert_ne!(resolved["eduble"], Address::ZERO);
    }

    #[test]
    fn builder_keeps_declaration_order() {
        let module = build_module("Multi", |m| {
            let first = m.contract("First");
            let second = m.contract_with_args("Second", vec![json::JsonValue::from(42)]);

            BTreeMap::from([
                ("first".to_string(), first),
                ("second".to_string(), second),
            ])
        });

        assert_eq!(module.steps().len(), 2);
        assert_eq!(module.exports()["first"].step_index(), 0);
        assert_eq!(module.exports()["second"].step_index(), 1);
        assert_eq!(module.steps()[1].constructor_args.len(), 1);
    }
}
