// 端到端：编辑 → 校验 → 修正 → 保存 → 回读

use gitanalyzer_core::{
    ArtifactStore, SaveError, StoreConfig, StoreError, TemplateService,
};
use tempfile::TempDir;

fn service() -> (TempDir, TempDir, TemplateService) {
    let templates = TempDir::new().unwrap();
    let results = TempDir::new().unwrap();
    let store = ArtifactStore::new(StoreConfig {
        template_dir: templates.path().to_path_buf(),
        result_dir: results.path().to_path_buf(),
    });
    (templates, results, TemplateService::new(store))
}

const BROKEN: &str = r#"name: npm tokens
description: Find npm registry tokens
tags:
  - npm
type: Flat
requirements:
  npm:
    - npm-cli
regex:
  - expression: (npm_[A-Za-z0-9]{36})
    description: npm access token
    references:
      - CWE-798
    validation:
      tests:
        - input: //registry.npmjs.org/:_authToken=npm_abc
          want:
            - npm_abc
"#;

const FIXED: &str = r#"name: npm tokens
description: Find npm registry tokens
tags:
  - npm
type: Flat
requirements:
  npm:
    - npm-cli
regex:
  - expression: (npm_[A-Za-z0-9]{36})
    group: 1
    description: npm access token
    references:
      - CWE-798
    validation:
      tests:
        - input: //registry.npmjs.org/:_authToken=npm_abc
          want:
            - npm_abc
"#;

#[test]
fn edit_validate_fix_save_fetch_cycle() {
    let (_templates, _results, service) = service();

    // 缺少 group：正好一条错误，定位到 regex[0].group；output 缺席不算错
    let errors = service.validate_document(BROKEN);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].property, "regex[0].group");

    // 补上 group 后通过
    assert!(service.validate_document(FIXED).is_empty());

    // 过短的文件名被长度策略拒绝（恰好6个字符仍不够）
    match service.save("t.yaml", FIXED) {
        Err(SaveError::Policy(errors)) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].property, "fileName");
            assert_eq!(errors[0].message, "must be >6 character!");
        }
        other => panic!("expected policy rejection, got {:?}", other.map(|_| ())),
    }

    // 改名后保存成功，回读得到逐字节相同的文本
    let saved = service.save("test1.yaml", FIXED).unwrap();
    assert_eq!(saved.file_name, "test1.yaml");
    assert_eq!(service.fetch("test1.yaml").unwrap(), FIXED);

    // 列表里能看到它
    let listing = service.list().unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].file, "test1.yaml");
}

#[test]
fn listing_without_template_directory_reports_unavailable() {
    let (templates, _results, service) = service();
    drop(templates);

    match service.list() {
        Err(StoreError::Unavailable { .. }) => {}
        other => panic!("expected Unavailable, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn save_does_not_rerun_schema_validation() {
    // 契约：调用方必须先拿到空的校验结果；save只守文件名策略
    let (_templates, _results, service) = service();
    let saved = service.save("broken1.yaml", "not: [valid").unwrap();
    assert_eq!(saved.file_name, "broken1.yaml");
    assert_eq!(service.fetch("broken1.yaml").unwrap(), "not: [valid");
}
