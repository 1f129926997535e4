mod controller;
pub(crate) mod usecase;

use ctor::ctor;

#[ctor]
fn logs() {
    env_logger::init();
}
