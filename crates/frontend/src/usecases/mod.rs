pub mod u001_guest_registration;
