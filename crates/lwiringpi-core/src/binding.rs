use crate::backend::WiringPi;
use crate::constants::{ConstantEntry, CONSTANTS};
use crate::error::{BindingError, BindingResult};
use crate::schema::{coerce, ReturnShape};
use crate::specs::{self, Operation, OPERATIONS};
use crate::value::Value;

/// One name in the module namespace a script sees.
#[derive(Debug, Clone, Copy)]
pub enum Export {
    Operation(&'static Operation),
    Constant(&'static ConstantEntry),
}

impl Export {
    pub fn name(&self) -> &'static str {
        match self {
            Export::Operation(op) => op.name,
            Export::Constant(c) => c.name,
        }
    }
}

/// Every operation followed by every constant, each exactly once.
pub fn exports() -> impl Iterator<Item = Export> {
    OPERATIONS
        .iter()
        .map(Export::Operation)
        .chain(CONSTANTS.iter().map(Export::Constant))
}

/// Trait for script hosts that receive the exported namespace
pub trait ExportSink {
    type Error;

    fn define_operation(&mut self, op: &'static Operation) -> Result<(), Self::Error>;
    fn define_constant(&mut self, constant: &'static ConstantEntry) -> Result<(), Self::Error>;

    fn bootstrap_exports(&mut self) -> Result<(), Self::Error> {
        for export in exports() {
            match export {
                Export::Operation(op) => self.define_operation(op)?,
                Export::Constant(c) => self.define_constant(c)?,
            }
        }
        Ok(())
    }
}

/// The dispatch side of the binding table: looks operations up by name,
/// coerces arguments and forwards to the backend.
pub struct Binding<B: WiringPi = Box<dyn WiringPi>> {
    backend: B,
}

impl<B: WiringPi> Binding<B> {
    pub fn new(backend: B) -> Self {
        log::info!("wiringPi binding on {} backend", backend.label());
        Binding { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn operations(&self) -> &'static [Operation] {
        OPERATIONS
    }

    pub fn constants(&self) -> &'static [ConstantEntry] {
        CONSTANTS
    }

    pub fn descriptor(&self, name: &str) -> Option<&'static Operation> {
        specs::find(name)
    }

    /// Call an operation by its external name.
    pub fn call(&self, name: &str, args: &[Value]) -> BindingResult<Option<Value>> {
        let op = specs::find(name).ok_or_else(|| BindingError::NoSuchOperation(name.to_string()))?;
        self.invoke(op, args)
    }

    /// Coerce `raw` against `op`'s parameters, then forward. Nothing reaches
    /// the backend unless every argument coerced.
    pub fn invoke(&self, op: &Operation, raw: &[Value]) -> BindingResult<Option<Value>> {
        let args = coerce(op, raw).inspect_err(|e| log::debug!("{e}"))?;
        log::debug!("{}{:?}", op.name, args.values());
        let result = (op.func)(&self.backend, &args)?;
        check_shape(op, &result)?;
        Ok(result)
    }
}

fn check_shape(op: &Operation, result: &Option<Value>) -> BindingResult<()> {
    let ok = matches!(
        (op.returns, result),
        (ReturnShape::None, None)
            | (ReturnShape::Integer, Some(Value::Integer(_)))
            | (ReturnShape::Number, Some(Value::Number(_)))
            | (ReturnShape::Record, Some(Value::Record(_)))
    );
    if ok {
        Ok(())
    } else {
        Err(BindingError::Internal(format!(
            "{} declared {} but produced {result:?}",
            op.name,
            op.returns.describe()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::SimulatedBackend;
    use std::collections::HashSet;

    #[derive(Default)]
    struct Names(Vec<&'static str>);

    impl ExportSink for Names {
        type Error = String;

        fn define_operation(&mut self, op: &'static Operation) -> Result<(), String> {
            self.0.push(op.name);
            Ok(())
        }

        fn define_constant(&mut self, constant: &'static ConstantEntry) -> Result<(), String> {
            self.0.push(constant.name);
            Ok(())
        }
    }

    #[test]
    fn bootstrap_defines_every_name_once() {
        let mut sink = Names::default();
        sink.bootstrap_exports().unwrap();
        let unique: HashSet<_> = sink.0.iter().collect();
        assert_eq!(sink.0.len(), OPERATIONS.len() + CONSTANTS.len());
        assert_eq!(unique.len(), sink.0.len());
        assert_eq!(sink.0.first(), Some(&"wiringPiSetup"));
        assert_eq!(sink.0.last(), Some(&"PI_MAKER_MBEST"));
    }

    #[test]
    fn unknown_name_is_no_such_operation() {
        let binding = Binding::new(SimulatedBackend::new());
        assert_eq!(
            binding.call("piLock", &[Value::Integer(0)]),
            Err(BindingError::NoSuchOperation("piLock".into()))
        );
        assert!(binding.backend().calls().is_empty());
    }

    #[test]
    fn shape_mismatch_is_internal() {
        let op = specs::find("pinMode").unwrap();
        assert!(check_shape(op, &None).is_ok());
        assert!(matches!(
            check_shape(op, &Some(Value::Integer(1))),
            Err(BindingError::Internal(_))
        ));
    }
}
