use custom_error::custom_error;

custom_error! {
///! Failure of a single subscription call to the mailing list provider.
pub SubscriptionError
    Network{source: reqwest::Error} = "Could not reach the mailing list provider: {source}",
    Rejected{status: u16, message: String} = "The mailing list provider rejected the \
    subscription with status {status}: {message}",
    MalformedInput{message: String} = "{message}",
}

pub type SubscriptionResult = Result<(), SubscriptionError>;
