use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Run one dashboard section, containing any panic.
///
/// On panic the fault is logged at `error` with the section name and the
/// section's `Default` value is returned (`0`, empty list, empty report).
pub fn guarded<T: Default>(section: &'static str, f: impl FnOnce() -> T) -> T {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(v) => v,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::error!(section, %message, "dashboard section failed; using empty value");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_value_through() {
        assert_eq!(guarded("count", || 7usize), 7);
    }

    #[test]
    fn panic_yields_default() {
        let v: Vec<u32> = guarded("list", || panic!("boom"));
        assert!(v.is_empty());

        let n: usize = guarded("count", || panic!("{}", String::from("formatted boom")));
        assert_eq!(n, 0);
    }

    #[test]
    fn payload_messages() {
        let p: Box<dyn Any + Send> = Box::new("static");
        assert_eq!(panic_message(p.as_ref()), "static");
        let p: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(p.as_ref()), "owned");
        let p: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(p.as_ref()), "non-string panic payload");
    }
}
