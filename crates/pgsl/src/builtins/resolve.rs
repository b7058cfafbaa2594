//! First-fit generic overload resolution.
//!
//! Headers are tried in table order and the first one that matches wins.
//! There is no scoring; tables list the most specific headers first.

use alloc::{
    collections::BTreeMap,
    format,
    string::String,
    vec::Vec,
};

use super::{
    header::{OverloadHeader, ParameterType},
    BuiltinFunction,
};
use crate::types::Type;

/// A header with every generic bound.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOverload<'h> {
    pub header: &'h OverloadHeader,
    pub generics: BTreeMap<&'static str, Type>,
    /// Parameter types after substitution.
    pub parameters: Vec<Type>,
    pub return_type: Type,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveFailure {
    pub message: String,
}

impl BuiltinFunction {
    /// Pick the first header accepting `arguments`.
    ///
    /// `explicit_generics` are bound positionally before matching and must
    /// satisfy their restrictions too.
    pub fn resolve(
        &self,
        arguments: &[Type],
        explicit_generics: &[Type],
    ) -> Result<ResolvedOverload<'_>, ResolveFailure> {
        for (index, header) in self.headers.iter().enumerate() {
            if let Some(resolved) = try_header(header, arguments, explicit_generics) {
                log::debug!(
                    "Resolved {} with header {} returning {}",
                    self.name,
                    index,
                    resolved.return_type
                );
                return Ok(resolved);
            }
        }

        let arguments: Vec<String> = arguments.iter().map(|ty| format!("{}", ty)).collect();
        Err(ResolveFailure {
            message: format!(
                "No matching overload for function \"{}\" with arguments ({}).",
                self.name,
                arguments.join(", ")
            ),
        })
    }
}

fn try_header<'h>(
    header: &'h OverloadHeader,
    arguments: &[Type],
    explicit_generics: &[Type],
) -> Option<ResolvedOverload<'h>> {
    if explicit_generics.len() > header.generics.len()
        || arguments.len() != header.parameters.len()
    {
        return None;
    }

    let mut bindings: Vec<Option<Type>> = header.generics.iter().map(|_| None).collect();
    for ((binding, generic), explicit) in bindings
        .iter_mut()
        .zip(&header.generics)
        .zip(explicit_generics)
    {
        if !generic.accepts(explicit) {
            return None;
        }
        *binding = Some(explicit.clone());
    }

    for (parameter, argument) in header.parameters.iter().zip(arguments) {
        match &parameter.ty {
            ParameterType::Concrete(ty) => {
                if !argument.is_implicit_castable_into(ty) {
                    return None;
                }
            }
            ParameterType::Generic(name) => {
                let index = header.generic_index(name)?;
                match &bindings[index] {
                    // First occurrence fixes the binding.
                    Some(bound) => {
                        if !(argument.equals(bound) || argument.is_implicit_castable_into(bound)) {
                            return None;
                        }
                    }
                    None => {
                        if !header.generics[index].accepts(argument) {
                            return None;
                        }
                        bindings[index] = Some(argument.clone());
                    }
                }
            }
        }
    }

    let mut generics = BTreeMap::new();
    for (generic, binding) in header.generics.iter().zip(bindings) {
        generics.insert(generic.name, binding?);
    }

    let substitute = |ty: &ParameterType| match ty {
        ParameterType::Concrete(ty) => Some(ty.clone()),
        ParameterType::Generic(name) => generics.get(name).cloned(),
    };
    let parameters = header
        .parameters
        .iter()
        .map(|parameter| substitute(&parameter.ty))
        .collect::<Option<Vec<_>>>()?;
    let return_type = substitute(&header.return_type)?;

    Some(ResolvedOverload {
        header,
        generics,
        parameters,
        return_type,
    })
}
