use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::error_tree::FieldErrors;
use crate::domain::errors::BoxError;
use crate::domain::ports::{Resolver, ResolverContext, ResolverOptions, ResolverOutput};

// One recorded resolver invocation.
#[derive(Clone, Debug)]
pub(crate) struct ResolveCall {
    pub data: Value,
    pub context: ResolverContext,
    pub options: ResolverOptions,
}

// Scripted resolver that remembers how it was called.
#[derive(Clone)]
pub(crate) struct RecordingResolver {
    output: ResolverOutput<Value>,
    should_fail: bool,
    calls: Arc<Mutex<Vec<ResolveCall>>>,
}

impl RecordingResolver {
    pub(crate) fn valid(values: Value) -> Self {
        Self::with_output(ResolverOutput::valid(values))
    }

    pub(crate) fn invalid(errors: FieldErrors) -> Self {
        Self::with_output(ResolverOutput::invalid(errors))
    }

    pub(crate) fn with_output(output: ResolverOutput<Value>) -> Self {
        Self {
            output,
            should_fail: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::valid(Value::Null)
        }
    }

    pub(crate) fn calls(&self) -> Vec<ResolveCall> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }
}

#[async_trait]
impl Resolver for RecordingResolver {
    type Values = Value;

    async fn resolve(
        &self,
        data: Value,
        context: &ResolverContext,
        options: &ResolverOptions,
    ) -> Result<ResolverOutput<Value>, BoxError> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push(ResolveCall {
                data,
                context: context.clone(),
                options: options.clone(),
            });

        if self.should_fail {
            return Err("schema unavailable".into());
        }
        Ok(self.output.clone())
    }
}
