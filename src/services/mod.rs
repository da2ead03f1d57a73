pub mod duplicated_email_checker;
