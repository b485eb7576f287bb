use axisops_core::Tensor;

// Helper function to create an f32 test tensor filled with 0, 1, 2, ...
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub(crate) fn create_test_tensor(shape: &[usize]) -> Tensor {
    let numel: usize = shape.iter().product();
    Tensor::new((0..numel).map(|x| x as f32).collect(), shape.to_vec())
        .expect("Test tensor creation failed")
}

#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
