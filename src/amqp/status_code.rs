use amq_protocol_types::ShortUInt;
use std::fmt;

/// Response status codes carried by AMQP management and CBS replies.
///
/// The codes are the HTTP ones, reused as-is. Several names are aliases sharing the same numeric
/// value (e.g. [`AMBIGUOUS`](Self::AMBIGUOUS) and [`MULTIPLE_CHOICES`](Self::MULTIPLE_CHOICES)),
/// hence a newtype with associated constants rather than an enum.
///
/// ```rust
/// use amqp_connection_core::amqp::AmqpResponseStatusCode;
///
/// assert_eq!(AmqpResponseStatusCode::AMBIGUOUS, AmqpResponseStatusCode::MULTIPLE_CHOICES);
/// assert_eq!(AmqpResponseStatusCode::from(404), AmqpResponseStatusCode::NOT_FOUND);
/// assert!(AmqpResponseStatusCode::ACCEPTED.is_success());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AmqpResponseStatusCode(ShortUInt);

impl AmqpResponseStatusCode {
    pub const CONTINUE: Self = Self(100);
    pub const SWITCHING_PROTOCOLS: Self = Self(101);
    pub const OK: Self = Self(200);
    pub const CREATED: Self = Self(201);
    pub const ACCEPTED: Self = Self(202);
    pub const NON_AUTHORITATIVE_INFORMATION: Self = Self(203);
    pub const NO_CONTENT: Self = Self(204);
    pub const RESET_CONTENT: Self = Self(205);
    pub const PARTIAL_CONTENT: Self = Self(206);
    pub const AMBIGUOUS: Self = Self(300);
    pub const MULTIPLE_CHOICES: Self = Self(300);
    pub const MOVED: Self = Self(301);
    pub const MOVED_PERMANENTLY: Self = Self(301);
    pub const FOUND: Self = Self(302);
    pub const REDIRECT: Self = Self(302);
    pub const REDIRECT_METHOD: Self = Self(303);
    pub const SEE_OTHER: Self = Self(303);
    pub const NOT_MODIFIED: Self = Self(304);
    pub const USE_PROXY: Self = Self(305);
    pub const UNUSED: Self = Self(306);
    pub const REDIRECT_KEEP_VERB: Self = Self(307);
    pub const TEMPORARY_REDIRECT: Self = Self(307);
    pub const BAD_REQUEST: Self = Self(400);
    pub const UNAUTHORIZED: Self = Self(401);
    pub const PAYMENT_REQUIRED: Self = Self(402);
    pub const FORBIDDEN: Self = Self(403);
    pub const NOT_FOUND: Self = Self(404);
    pub const METHOD_NOT_ALLOWED: Self = Self(405);
    pub const NOT_ACCEPTABLE: Self = Self(406);
    pub const PROXY_AUTHENTICATION_REQUIRED: Self = Self(407);
    pub const REQUEST_TIMEOUT: Self = Self(408);
    pub const CONFLICT: Self = Self(409);
    pub const GONE: Self = Self(410);
    pub const LENGTH_REQUIRED: Self = Self(411);
    pub const PRECONDITION_FAILED: Self = Self(412);
    pub const REQUEST_ENTITY_TOO_LARGE: Self = Self(413);
    pub const REQUEST_URI_TOO_LONG: Self = Self(414);
    pub const UNSUPPORTED_MEDIA_TYPE: Self = Self(415);
    pub const REQUESTED_RANGE_NOT_SATISFIABLE: Self = Self(416);
    pub const EXPECTATION_FAILED: Self = Self(417);
    pub const UPGRADE_REQUIRED: Self = Self(426);
    pub const INTERNAL_SERVER_ERROR: Self = Self(500);
    pub const NOT_IMPLEMENTED: Self = Self(501);
    pub const BAD_GATEWAY: Self = Self(502);
    pub const SERVICE_UNAVAILABLE: Self = Self(503);
    pub const GATEWAY_TIMEOUT: Self = Self(504);
    pub const HTTP_VERSION_NOT_SUPPORTED: Self = Self(505);

    /// Every named code, aliases included, in declaration order.
    pub const ALL: &'static [(&'static str, Self)] = &[
        ("Continue", Self::CONTINUE),
        ("SwitchingProtocols", Self::SWITCHING_PROTOCOLS),
        ("OK", Self::OK),
        ("Created", Self::CREATED),
        ("Accepted", Self::ACCEPTED),
        ("NonAuthoritativeInformation", Self::NON_AUTHORITATIVE_INFORMATION),
        ("NoContent", Self::NO_CONTENT),
        ("ResetContent", Self::RESET_CONTENT),
        ("PartialContent", Self::PARTIAL_CONTENT),
        ("Ambiguous", Self::AMBIGUOUS),
        ("MultipleChoices", Self::MULTIPLE_CHOICES),
        ("Moved", Self::MOVED),
        ("MovedPermanently", Self::MOVED_PERMANENTLY),
        ("Found", Self::FOUND),
        ("Redirect", Self::REDIRECT),
        ("RedirectMethod", Self::REDIRECT_METHOD),
        ("SeeOther", Self::SEE_OTHER),
        ("NotModified", Self::NOT_MODIFIED),
        ("UseProxy", Self::USE_PROXY),
        ("Unused", Self::UNUSED),
        ("RedirectKeepVerb", Self::REDIRECT_KEEP_VERB),
        ("TemporaryRedirect", Self::TEMPORARY_REDIRECT),
        ("BadRequest", Self::BAD_REQUEST),
        ("Unauthorized", Self::UNAUTHORIZED),
        ("PaymentRequired", Self::PAYMENT_REQUIRED),
        ("Forbidden", Self::FORBIDDEN),
        ("NotFound", Self::NOT_FOUND),
        ("MethodNotAllowed", Self::METHOD_NOT_ALLOWED),
        ("NotAcceptable", Self::NOT_ACCEPTABLE),
        ("ProxyAuthenticationRequired", Self::PROXY_AUTHENTICATION_REQUIRED),
        ("RequestTimeout", Self::REQUEST_TIMEOUT),
        ("Conflict", Self::CONFLICT),
        ("Gone", Self::GONE),
        ("LengthRequired", Self::LENGTH_REQUIRED),
        ("PreconditionFailed", Self::PRECONDITION_FAILED),
        ("RequestEntityTooLarge", Self::REQUEST_ENTITY_TOO_LARGE),
        ("RequestUriTooLong", Self::REQUEST_URI_TOO_LONG),
        ("UnsupportedMediaType", Self::UNSUPPORTED_MEDIA_TYPE),
        ("RequestedRangeNotSatisfiable", Self::REQUESTED_RANGE_NOT_SATISFIABLE),
        ("ExpectationFailed", Self::EXPECTATION_FAILED),
        ("UpgradeRequired", Self::UPGRADE_REQUIRED),
        ("InternalServerError", Self::INTERNAL_SERVER_ERROR),
        ("NotImplemented", Self::NOT_IMPLEMENTED),
        ("BadGateway", Self::BAD_GATEWAY),
        ("ServiceUnavailable", Self::SERVICE_UNAVAILABLE),
        ("GatewayTimeout", Self::GATEWAY_TIMEOUT),
        ("HttpVersionNotSupported", Self::HTTP_VERSION_NOT_SUPPORTED),
    ];

    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Lookup a code by one of its names (e.g. `"NotFound"`).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, code)| *code)
    }

    /// The first name declared for this code, if it is a known one.
    ///
    /// For aliased codes this is the name listed first, e.g. `Ambiguous` for 300.
    pub fn canonical_name(self) -> Option<&'static str> {
        Self::ALL
            .iter()
            .find(|(_, code)| *code == self)
            .map(|(name, _)| *name)
    }

    pub fn is_success(self) -> bool {
        (200..300).contains(&self.0)
    }

    pub fn is_redirection(self) -> bool {
        (300..400).contains(&self.0)
    }

    pub fn is_client_error(self) -> bool {
        (400..500).contains(&self.0)
    }

    pub fn is_server_error(self) -> bool {
        (500..600).contains(&self.0)
    }
}

impl From<ShortUInt> for AmqpResponseStatusCode {
    fn from(code: ShortUInt) -> Self {
        Self(code)
    }
}

impl From<AmqpResponseStatusCode> for ShortUInt {
    fn from(code: AmqpResponseStatusCode) -> Self {
        code.0
    }
}

impl fmt::Display for AmqpResponseStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.canonical_name() {
            Some(name) => write!(f, "{} {name}", self.0),
            None => write!(f, "{}", self.0),
        }
    }
}
