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

//! Command-line entry point for the Figma-to-JSX transpiler: reads an
//! `input.json` Figma document, runs the pipeline, and writes both the
//! intermediate `UITree` and the final JSX source to disk.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use figma_jsx::error::Error;

#[derive(Parser, Debug)]
#[command(about = "Convert a Figma document into a React Native JSX screen")]
struct Args {
    /// Figma document JSON to read
    #[arg(short, long, default_value = "input.json")]
    input: PathBuf,
    /// Path to write the intermediate UITree JSON
    #[arg(long, default_value = "output.json")]
    tree_output: PathBuf,
    /// Path to write the emitted JSX source
    #[arg(long, default_value = "output.tsx")]
    jsx_output: PathBuf,
}

fn run(args: Args) -> Result<(), Error> {
    let raw = std::fs::read_to_string(&args.input)?;
    let figma_json: serde_json::Value = serde_json::from_str(&raw)?;

    let tree = figma_jsx::build(&figma_json)?;
    let jsx = figma_jsx::emit(&tree);

    let tree_json = serde_json::to_string_pretty(&tree)?;
    std::fs::write(&args.tree_output, tree_json)?;
    std::fs::write(&args.jsx_output, jsx)?;

    log::info!(
        "wrote {} and {}",
        args.tree_output.display(),
        args.jsx_output.display()
    );
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("figma-to-jsx failed: {e}");
        process::exit(1);
    }
}
