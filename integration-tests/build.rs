use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Contracts the factories deploy from uploaded wasm.
const DEPLOYED: [(&str, &str); 2] = [
    ("crowdsale", "CROWDSALE_WASM"),
    ("exchange", "EXCHANGE_WASM"),
];

/// Preferred target first. The legacy target needs the mvp cpu so the host accepts the module.
const TARGETS: [(&str, &str); 2] = [
    ("wasm32v1-none", ""),
    ("wasm32-unknown-unknown", "-Ctarget-cpu=mvp"),
];

fn main() {
    println!("cargo:rustc-check-cfg=cfg(fundhub_wasm)");

    let manifest_dir = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR").unwrap());
    let workspace = manifest_dir.parent().unwrap().to_path_buf();
    for source in [
        "contracts/crowdsale/src",
        "contracts/exchange/src",
        "contracts/service-locator/src",
        "packages/fundhub-interfaces/src",
        "packages/fundhub-std/src",
    ] {
        println!("cargo:rerun-if-changed={}", workspace.join(source).display());
    }

    let target_dir = Path::new(&env::var_os("OUT_DIR").unwrap()).join("wasm");
    let mut failures = Vec::new();

    for (target, rustflags) in TARGETS {
        match build(&workspace, &target_dir, target, rustflags) {
            Ok(artefacts) => {
                for ((_, var), path) in DEPLOYED.iter().zip(artefacts) {
                    println!("cargo:rustc-env={}={}", var, path.display());
                }
                println!("cargo:rustc-cfg=fundhub_wasm");
                return;
            }
            Err(error) => failures.push((target, error)),
        }
    }

    println!("cargo:warning=contract wasm was not built, deployment tests are skipped");
    for (target, error) in failures {
        let reason = error.lines().last().unwrap_or_default();
        println!("cargo:warning={target}: {reason}");
    }
}

fn build(
    workspace: &Path,
    target_dir: &Path,
    target: &str,
    rustflags: &str,
) -> Result<Vec<PathBuf>, String> {
    let cargo = env::var_os("CARGO").unwrap_or_else(|| "cargo".into());

    let mut command = Command::new(cargo);
    command
        .current_dir(workspace)
        .args(["build", "--release", "--target", target])
        .arg("--target-dir")
        .arg(target_dir)
        .env_remove("CARGO_TARGET_DIR")
        .env_remove("RUSTFLAGS")
        .env("CARGO_ENCODED_RUSTFLAGS", rustflags);
    for (package, _) in DEPLOYED {
        command.args(["--package", package]);
    }

    // stdout is left captured, cargo would read the child's lines as build directives.
    let output = command.output().map_err(|error| error.to_string())?;
    if !output.status.success() {
        return Err(String::from_utf8_lossy(&output.stderr).into_owned());
    }

    DEPLOYED
        .iter()
        .map(|(package, _)| {
            let path = target_dir
                .join(target)
                .join("release")
                .join(format!("{}.wasm", package.replace('-', "_")));
            if path.exists() {
                Ok(path)
            } else {
                Err(format!("{} is missing", path.display()))
            }
        })
        .collect()
}
