pub mod impl_fake;
#[cfg(test)]
pub mod impl_fake_loader;
#[cfg(test)]
pub mod impl_scripted;
pub mod impl_teachable_machine;
pub mod interface;
