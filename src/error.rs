// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

/// Combined error type for all errors that can occur converting a Figma
/// document to JSX.
#[derive(Error, Debug)]
pub enum Error {
    /// No node under the document matches the `Name_TYPE` naming convention.
    #[error("no root component found: no node in the document matches Name_TYPE")]
    NoRootComponent,
    /// Raised only by the transport layer (the CLI binary), never by `build`/`emit`.
    #[error("invalid JSON input: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Raised only by the transport layer (the CLI binary), never by `build`/`emit`.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
