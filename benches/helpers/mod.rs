pub mod pipeline_builders;
