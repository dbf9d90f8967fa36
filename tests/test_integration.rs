use js_logs_remover::{run, Catalog, MethodSet, RunOptions};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn create_project(root: &Path) {
    fs::create_dir_all(root.join("web/src/hooks")).unwrap();
    fs::create_dir_all(root.join("web/node_modules/react")).unwrap();
    fs::create_dir_all(root.join("api/.git")).unwrap();

    fs::write(
        root.join("web/src/App.jsx"),
        "import React from 'react';\n\
         // console.log('debug render');\n\
         export default function App() {\n\
         \x20 console.table(rows);\n\
         \x20 console.warn('deprecated');\n\
         \x20 return null;\n\
         }\n",
    )
    .unwrap();
    fs::write(
        root.join("web/src/hooks/useThing.ts"),
        "export const useThing = () => {\r\n  console.debug('x');\r\n  return 1;\r\n};\r\n",
    )
    .unwrap();
    fs::write(
        root.join("web/node_modules/react/index.js"),
        "console.log('vendored');\n",
    )
    .unwrap();
    fs::write(root.join("api/.git/hook.js"), "console.log('git');\n").unwrap();
}

#[test]
fn test_full_tree_rewrite() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    create_project(root);

    let catalog = Catalog::load().unwrap();
    let methods = MethodSet::resolve(&["log,table", "debug"], &catalog);
    let summary = run(root, &methods, &catalog, RunOptions::default()).unwrap();

    assert_eq!(summary.files_processed, 2);
    assert_eq!(summary.lines_removed, 3);

    assert_eq!(
        fs::read_to_string(root.join("web/src/App.jsx")).unwrap(),
        "import React from 'react';\n\
         \n\
         export default function App() {\n\
         \n\
         \x20 console.warn('deprecated');\n\
         \x20 return null;\n\
         }\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("web/src/hooks/useThing.ts")).unwrap(),
        "export const useThing = () => {\r\n\n  return 1;\r\n};\r\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("web/node_modules/react/index.js")).unwrap(),
        "console.log('vendored');\n"
    );
    assert_eq!(
        fs::read_to_string(root.join("api/.git/hook.js")).unwrap(),
        "console.log('git');\n"
    );
}

#[test]
fn test_second_run_is_a_no_op() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    create_project(root);

    let catalog = Catalog::load().unwrap();
    let methods = MethodSet::resolve(&["all"], &catalog);

    run(root, &methods, &catalog, RunOptions::default()).unwrap();
    let after_first = fs::read_to_string(root.join("web/src/App.jsx")).unwrap();

    let summary = run(root, &methods, &catalog, RunOptions::default()).unwrap();
    let after_second = fs::read_to_string(root.join("web/src/App.jsx")).unwrap();

    assert_eq!(after_first, after_second);
    assert_eq!(summary.lines_removed, 0);
    assert_eq!(summary.files_processed, 2);
}

#[test]
fn test_empty_method_set_keeps_bytes() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    create_project(root);
    let before = fs::read(root.join("web/src/hooks/useThing.ts")).unwrap();

    let catalog = Catalog::load().unwrap();
    let args: Vec<String> = Vec::new();
    let methods = MethodSet::resolve(&args, &catalog);
    let summary = run(root, &methods, &catalog, RunOptions::default()).unwrap();

    assert_eq!(summary.lines_removed, 0);
    assert_eq!(fs::read(root.join("web/src/hooks/useThing.ts")).unwrap(), before);
}
