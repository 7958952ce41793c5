pub(crate) use super::{ColumnarProvider, ColumnarProviderError};

mod support;
