#![allow(dead_code)]

use std::fmt::Write;

/// `job_count` jobs spread round-robin over `stage_count` stages.
pub fn build_linear_pipeline(job_count: usize, stage_count: usize) -> String {
    let mut yaml = String::new();
    let stage_count = stage_count.max(1);
    writeln!(&mut yaml, "workflow:").ok();
    writeln!(&mut yaml, "  name: Bench pipeline").ok();
    writeln!(&mut yaml, "variables:").ok();
    writeln!(&mut yaml, "  CARGO_HOME: .cargo").ok();
    writeln!(&mut yaml, "  RUST_LOG:").ok();
    writeln!(&mut yaml, "    value: info").ok();
    writeln!(&mut yaml, "    description: Log level").ok();

    for i in 0..job_count {
        writeln!(&mut yaml, "job{}:", i).ok();
        writeln!(&mut yaml, "  stage: s{}", i % stage_count).ok();
        writeln!(&mut yaml, "  script:").ok();
        writeln!(&mut yaml, "    - echo job {}", i).ok();
        writeln!(&mut yaml, "    - make target-{}", i).ok();
    }

    yaml
}

/// Jobs using every structured keyword plus a few generic ones.
pub fn build_rich_pipeline(job_count: usize) -> String {
    let mut yaml = String::new();
    writeln!(&mut yaml, "default:").ok();
    writeln!(&mut yaml, "  image: rust:1.80").ok();
    writeln!(&mut yaml, "  retry: 1").ok();
    writeln!(&mut yaml, "include:").ok();
    writeln!(&mut yaml, "  - local: ci/base.yml").ok();
    writeln!(&mut yaml, "  - template: Security/SAST.gitlab-ci.yml").ok();

    for i in 0..job_count.max(1) {
        writeln!(&mut yaml, "job{}:", i).ok();
        writeln!(&mut yaml, "  stage: stage-{}", i % 4).ok();
        writeln!(&mut yaml, "  image: {{ name: alpine, entrypoint: [\"\"] }}").ok();
        writeln!(&mut yaml, "  before_script: apk add make").ok();
        writeln!(&mut yaml, "  script: [make, make check]").ok();
        writeln!(&mut yaml, "  variables: {{ JOB: \"{}\" }}", i).ok();
        writeln!(&mut yaml, "  rules:").ok();
        writeln!(&mut yaml, "    - if: $CI_COMMIT_BRANCH == \"main\"").ok();
        writeln!(&mut yaml, "      changes: [src/**/*]").ok();
        writeln!(&mut yaml, "    - when: manual").ok();
        writeln!(&mut yaml, "  cache: {{ key: k{}, paths: [target/], policy: pull }}", i).ok();
        writeln!(&mut yaml, "  artifacts: {{ paths: [dist/], expire_in: 1 day }}").ok();
        writeln!(&mut yaml, "  tags: [docker]").ok();
        writeln!(&mut yaml, "  environment: {{ name: review, url: \"https://example.com\" }}").ok();
    }

    yaml
}
