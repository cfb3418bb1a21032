//! Built-in templates.
//!
//! Bodies live under `src/builtin/` and are compiled into the binary. Paths
//! keep their `.tmpl` suffix; the registry strips it when deriving keys.

macro_rules! embed {
    ($($path:literal),+ $(,)?) => {
        &[$((
            concat!($path, ".tmpl"),
            include_str!(concat!("builtin/", $path, ".tmpl")),
        )),+]
    };
}

/// Every embedded template as `(relative path, body)`.
pub static EMBEDDED: &[(&str, &str)] = embed![
    "languages/go/main.go",
    "languages/go/go.mod",
    "languages/go/config/config.go",
    "languages/go/tools/tool.go",
    "languages/go/Taskfile.yml",
    "languages/go/.gitignore",
    "languages/typescript/src/index.ts",
    "languages/typescript/src/tools/tool.ts",
    "languages/typescript/package.json",
    "languages/typescript/tsconfig.json",
    "languages/typescript/Taskfile.yml",
    "languages/typescript/.gitignore",
    "languages/rust/src/main.rs",
    "languages/rust/src/tools/mod.rs",
    "languages/rust/src/tools/tool.rs",
    "languages/rust/Cargo.toml",
    "languages/rust/Taskfile.yml",
    "languages/rust/.gitignore",
    "languages/rust/docs/README.md",
    "common/agent/agent-card.json",
    "common/docs/README.md",
    "common/repo/.editorconfig",
    "common/repo/.gitattributes",
    "common/docker/Dockerfile.go",
    "common/docker/Dockerfile.typescript",
    "common/docker/Dockerfile.rust",
    "common/k8s/deployment.yaml",
    "common/ci/github.yml",
    "common/ci/gitlab.yml",
    "common/cd/github.yml",
    "sandbox/flox/manifest.toml",
    "sandbox/flox/env.json",
    "sandbox/flox/.gitignore",
    "sandbox/devcontainer/devcontainer.json",
];
