//! Error code tables: the application layer and the platform (internal) layer.
//!
//! Entries are actionable and do not ask for support unless marked otherwise.

use super::descriptor::{Category, ErrorDescriptor};
use super::Layer;

/// Errors surfaced by application code paths (functions, deployments, routing, ...).
pub const APPLICATION: Layer = Layer {
    name: "application",
    entries: APPLICATION_ENTRIES,
};

/// Internal platform failures; users should contact support.
pub const PLATFORM: Layer = Layer {
    name: "platform",
    entries: PLATFORM_ENTRIES,
};

const APPLICATION_ENTRIES: &[ErrorDescriptor] = &[
    ErrorDescriptor::new(
        "BODY_NOT_A_STRING_FROM_FUNCTION",
        Category::Function,
        502,
        "Function returned a non-string value",
        "A serverless function returned a value that is not a string. Functions must return strings or Response objects.",
        "The server encountered an error processing your request. Please try again.",
    ),
    ErrorDescriptor::new(
        "EDGE_FUNCTION_INVOCATION_FAILED",
        Category::Function,
        500,
        "Edge function invocation failed",
        "An edge function failed to execute properly.",
        "A server error occurred. Please try again later.",
    ),
    ErrorDescriptor::new(
        "EDGE_FUNCTION_INVOCATION_TIMEOUT",
        Category::Function,
        504,
        "Edge function execution timed out",
        "An edge function took too long to execute and was terminated.",
        "The request took too long to process. Please try again.",
    ),
    ErrorDescriptor::new(
        "FUNCTION_INVOCATION_FAILED",
        Category::Function,
        500,
        "Function invocation failed",
        "A serverless function failed to execute properly.",
        "A server error occurred. Please try again later.",
    ),
    ErrorDescriptor::new(
        "FUNCTION_INVOCATION_TIMEOUT",
        Category::Function,
        504,
        "Function execution timed out",
        "A serverless function took too long to execute and was terminated.",
        "The request took too long to process. Please try again.",
    ),
    ErrorDescriptor::new(
        "FUNCTION_PAYLOAD_TOO_LARGE",
        Category::Function,
        413,
        "Request payload too large",
        "The request body exceeds the maximum allowed size for serverless functions.",
        "The data you're trying to send is too large. Please reduce the size and try again.",
    ),
    ErrorDescriptor::new(
        "FUNCTION_RESPONSE_PAYLOAD_TOO_LARGE",
        Category::Function,
        500,
        "Response payload too large",
        "The function response exceeds the maximum allowed size.",
        "The server response is too large. Please contact support if this persists.",
    )
    .not_actionable(),
    ErrorDescriptor::new(
        "FUNCTION_THROTTLED",
        Category::Function,
        503,
        "Function rate limit exceeded",
        "Too many requests to the function. Rate limit exceeded.",
        "Too many requests. Please wait a moment and try again.",
    ),
    ErrorDescriptor::new(
        "NO_RESPONSE_FROM_FUNCTION",
        Category::Function,
        502,
        "No response from function",
        "The function did not return a response.",
        "The server did not respond. Please try again.",
    ),
    ErrorDescriptor::new(
        "DEPLOYMENT_BLOCKED",
        Category::Deployment,
        403,
        "Deployment blocked",
        "The deployment was blocked, possibly due to security or policy restrictions.",
        "This deployment is currently unavailable. Please contact support.",
    )
    .not_actionable(),
    ErrorDescriptor::new(
        "DEPLOYMENT_DELETED",
        Category::Deployment,
        410,
        "Deployment deleted",
        "The requested deployment has been deleted.",
        "This deployment no longer exists.",
    )
    .not_actionable(),
    ErrorDescriptor::new(
        "DEPLOYMENT_DISABLED",
        Category::Deployment,
        402,
        "Deployment disabled",
        "The deployment has been disabled, possibly due to billing issues.",
        "This deployment is currently disabled. Please check your account status.",
    )
    .not_actionable(),
    ErrorDescriptor::new(
        "DEPLOYMENT_NOT_FOUND",
        Category::Deployment,
        404,
        "Deployment not found",
        "The requested deployment could not be found.",
        "The requested page or resource could not be found.",
    ),
    ErrorDescriptor::new(
        "DEPLOYMENT_NOT_READY_REDIRECTING",
        Category::Deployment,
        303,
        "Deployment not ready, redirecting",
        "The deployment is not ready yet and is redirecting to a ready version.",
        "Redirecting to the latest version...",
    )
    .not_actionable(),
    ErrorDescriptor::new(
        "DEPLOYMENT_PAUSED",
        Category::Deployment,
        503,
        "Deployment paused",
        "The deployment has been paused.",
        "This deployment is currently paused. Please check your dashboard.",
    )
    .not_actionable(),
    ErrorDescriptor::new(
        "DNS_HOSTNAME_EMPTY",
        Category::Dns,
        502,
        "DNS hostname is empty",
        "The DNS hostname configuration is empty or invalid.",
        "DNS configuration error. Please contact support.",
    )
    .not_actionable(),
    ErrorDescriptor::new(
        "DNS_HOSTNAME_NOT_FOUND",
        Category::Dns,
        502,
        "DNS hostname not found",
        "The DNS hostname could not be resolved.",
        "Domain configuration error. Please check your DNS settings.",
    )
    .not_actionable(),
    ErrorDescriptor::new(
        "DNS_HOSTNAME_RESOLVE_FAILED",
        Category::Dns,
        502,
        "DNS resolution failed",
        "Failed to resolve the DNS hostname.",
        "Unable to resolve domain. Please check your DNS configuration.",
    )
    .not_actionable(),
    ErrorDescriptor::new(
        "DNS_HOSTNAME_RESOLVED_PRIVATE",
        Category::Dns,
        404,
        "DNS resolved to private IP",
        "The DNS hostname resolved to a private IP address, which is not allowed.",
        "Invalid domain configuration. Private IP addresses are not allowed.",
    )
    .not_actionable(),
    ErrorDescriptor::new(
        "DNS_HOSTNAME_SERVER_ERROR",
        Category::Dns,
        502,
        "DNS server error",
        "An error occurred with the DNS server.",
        "DNS server error. Please try again later.",
    ),
    ErrorDescriptor::new(
        "FALLBACK_BODY_TOO_LARGE",
        Category::Cache,
        502,
        "Fallback response too large",
        "The fallback response exceeds the maximum allowed size.",
        "The response is too large. Please try again.",
    ),
    ErrorDescriptor::new(
        "INFINITE_LOOP_DETECTED",
        Category::Runtime,
        508,
        "Infinite loop detected",
        "An infinite loop was detected in the code execution.",
        "A processing error occurred. Please refresh the page.",
    ),
    ErrorDescriptor::new(
        "INVALID_IMAGE_OPTIMIZE_REQUEST",
        Category::Image,
        400,
        "Invalid image optimization request",
        "The image optimization request is invalid.",
        "Invalid image request. Please check the image URL.",
    ),
    ErrorDescriptor::new(
        "OPTIMIZED_EXTERNAL_IMAGE_REQUEST_FAILED",
        Category::Image,
        502,
        "External image optimization failed",
        "Failed to fetch or optimize an external image.",
        "Unable to load the image. Please try again.",
    ),
    ErrorDescriptor::new(
        "OPTIMIZED_EXTERNAL_IMAGE_REQUEST_INVALID",
        Category::Image,
        502,
        "Invalid external image request",
        "The external image request is invalid.",
        "Invalid image URL. Please check the image source.",
    ),
    ErrorDescriptor::new(
        "OPTIMIZED_EXTERNAL_IMAGE_REQUEST_UNAUTHORIZED",
        Category::Image,
        502,
        "Unauthorized external image request",
        "The external image request is not authorized.",
        "Unable to access the image. Access may be restricted.",
    )
    .not_actionable(),
    ErrorDescriptor::new(
        "OPTIMIZED_EXTERNAL_IMAGE_TOO_MANY_REDIRECTS",
        Category::Image,
        502,
        "Too many redirects for external image",
        "The external image URL resulted in too many redirects.",
        "Image URL has too many redirects. Please check the image source.",
    ),
    ErrorDescriptor::new(
        "INVALID_REQUEST_METHOD",
        Category::Request,
        405,
        "Invalid request method",
        "The HTTP method used is not allowed for this endpoint.",
        "Invalid request method. Please try a different action.",
    ),
    ErrorDescriptor::new(
        "MALFORMED_REQUEST_HEADER",
        Category::Request,
        400,
        "Malformed request header",
        "One or more request headers are malformed.",
        "Invalid request. Please refresh the page and try again.",
    ),
    ErrorDescriptor::new(
        "REQUEST_HEADER_TOO_LARGE",
        Category::Request,
        431,
        "Request header too large",
        "The request headers exceed the maximum allowed size.",
        "Request is too large. Please clear your browser cache and try again.",
    ),
    ErrorDescriptor::new(
        "URL_TOO_LONG",
        Category::Request,
        414,
        "URL too long",
        "The request URL exceeds the maximum allowed length.",
        "The URL is too long. Please use a shorter URL or different method.",
    ),
    ErrorDescriptor::new(
        "RANGE_END_NOT_VALID",
        Category::Request,
        416,
        "Invalid range end value",
        "The Range header end value is invalid.",
        "Invalid request range. Please try again.",
    ),
    ErrorDescriptor::new(
        "RANGE_GROUP_NOT_VALID",
        Category::Request,
        416,
        "Invalid range group",
        "The Range header group is invalid.",
        "Invalid request range. Please try again.",
    ),
    ErrorDescriptor::new(
        "RANGE_MISSING_UNIT",
        Category::Request,
        416,
        "Range header missing unit",
        "The Range header is missing the unit specification.",
        "Invalid request range. Please try again.",
    ),
    ErrorDescriptor::new(
        "RANGE_START_NOT_VALID",
        Category::Request,
        416,
        "Invalid range start value",
        "The Range header start value is invalid.",
        "Invalid request range. Please try again.",
    ),
    ErrorDescriptor::new(
        "RANGE_UNIT_NOT_SUPPORTED",
        Category::Request,
        416,
        "Range unit not supported",
        "The Range header unit is not supported.",
        "Invalid request range. Please try again.",
    ),
    ErrorDescriptor::new(
        "TOO_MANY_RANGES",
        Category::Request,
        416,
        "Too many range requests",
        "The request contains too many range specifications.",
        "Too many range requests. Please simplify your request.",
    ),
    ErrorDescriptor::new(
        "MIDDLEWARE_INVOCATION_FAILED",
        Category::Function,
        500,
        "Middleware invocation failed",
        "The middleware function failed to execute.",
        "A server error occurred. Please try again later.",
    ),
    ErrorDescriptor::new(
        "MIDDLEWARE_INVOCATION_TIMEOUT",
        Category::Function,
        504,
        "Middleware execution timed out",
        "The middleware function took too long to execute.",
        "The request took too long. Please try again.",
    ),
    ErrorDescriptor::new(
        "MIDDLEWARE_RUNTIME_DEPRECATED",
        Category::Runtime,
        503,
        "Middleware runtime deprecated",
        "The middleware runtime version is deprecated.",
        "Service temporarily unavailable. Please try again later.",
    )
    .not_actionable(),
    ErrorDescriptor::new(
        "MICROFRONTENDS_MIDDLEWARE_ERROR",
        Category::Function,
        500,
        "Microfrontends middleware error",
        "An error occurred in the microfrontends middleware.",
        "A server error occurred. Please try again later.",
    ),
    ErrorDescriptor::new(
        "MICROFRONTENDS_MISSING_FALLBACK_ERROR",
        Category::Function,
        400,
        "Microfrontends missing fallback",
        "The microfrontends configuration is missing a required fallback.",
        "Configuration error. Please contact support.",
    )
    .not_actionable(),
    ErrorDescriptor::new(
        "ROUTER_CANNOT_MATCH",
        Category::Routing,
        502,
        "Router cannot match route",
        "The router could not match the requested route.",
        "Unable to process the request. Please try again.",
    ),
    ErrorDescriptor::new(
        "ROUTER_EXTERNAL_TARGET_CONNECTION_ERROR",
        Category::Routing,
        502,
        "External target connection error",
        "Failed to connect to the external routing target.",
        "Connection error. Please try again later.",
    ),
    ErrorDescriptor::new(
        "ROUTER_EXTERNAL_TARGET_ERROR",
        Category::Routing,
        502,
        "External target error",
        "An error occurred with the external routing target.",
        "External service error. Please try again later.",
    ),
    ErrorDescriptor::new(
        "ROUTER_EXTERNAL_TARGET_HANDSHAKE_ERROR",
        Category::Routing,
        502,
        "External target handshake error",
        "Failed to establish connection with external routing target.",
        "Connection error. Please try again later.",
    ),
    ErrorDescriptor::new(
        "ROUTER_TOO_MANY_HAS_SELECTIONS",
        Category::Routing,
        502,
        "Too many route has selections",
        "The route configuration has too many has selections.",
        "Configuration error. Please contact support.",
    )
    .not_actionable(),
    ErrorDescriptor::new(
        "TOO_MANY_FILESYSTEM_CHECKS",
        Category::Routing,
        502,
        "Too many filesystem checks",
        "Too many filesystem checks were performed during routing.",
        "Routing error. Please try again.",
    ),
    ErrorDescriptor::new(
        "TOO_MANY_FORKS",
        Category::Routing,
        502,
        "Too many route forks",
        "The routing configuration has too many forks.",
        "Configuration error. Please contact support.",
    )
    .not_actionable(),
    ErrorDescriptor::new(
        "SANDBOX_NOT_FOUND",
        Category::Sandbox,
        404,
        "Sandbox not found",
        "The requested sandbox environment could not be found.",
        "Development environment not found.",
    )
    .not_actionable(),
    ErrorDescriptor::new(
        "SANDBOX_NOT_LISTENING",
        Category::Sandbox,
        502,
        "Sandbox not listening",
        "The sandbox environment is not listening for requests.",
        "Development environment is not available.",
    )
    .not_actionable(),
    ErrorDescriptor::new(
        "SANDBOX_STOPPED",
        Category::Sandbox,
        410,
        "Sandbox stopped",
        "The sandbox environment has been stopped.",
        "Development environment has been stopped.",
    )
    .not_actionable(),
    ErrorDescriptor::new(
        "NOT_FOUND",
        Category::Deployment,
        404,
        "Resource not found",
        "The requested resource could not be found.",
        "The page you're looking for doesn't exist.",
    ),
    ErrorDescriptor::new(
        "RESOURCE_NOT_FOUND",
        Category::Request,
        404,
        "Resource not found",
        "The requested resource could not be found.",
        "The requested resource could not be found.",
    ),
];

const PLATFORM_ENTRIES: &[ErrorDescriptor] = &[
    ErrorDescriptor::new(
        "FUNCTION_THROTTLED",
        Category::Internal,
        500,
        "Function throttled (internal)",
        "Internal function throttling error. Contact Vercel support.",
        "Service temporarily unavailable. Please try again later or contact support.",
    )
    .not_actionable()
    .contact_support(),
    ErrorDescriptor::new(
        "INTERNAL_CACHE_ERROR",
        Category::Internal,
        500,
        "Internal cache error",
        "An internal cache error occurred. Contact Vercel support.",
        "A server error occurred. Please try again later or contact support.",
    )
    .not_actionable()
    .contact_support(),
    ErrorDescriptor::new(
        "INTERNAL_CACHE_KEY_TOO_LONG",
        Category::Internal,
        500,
        "Internal cache key too long",
        "The cache key exceeds the maximum length. Contact Vercel support.",
        "A server error occurred. Please contact support.",
    )
    .not_actionable()
    .contact_support(),
    ErrorDescriptor::new(
        "INTERNAL_CACHE_LOCK_FULL",
        Category::Internal,
        500,
        "Internal cache lock full",
        "The cache lock is full. Contact Vercel support.",
        "Service temporarily unavailable. Please try again later or contact support.",
    )
    .not_actionable()
    .contact_support(),
    ErrorDescriptor::new(
        "INTERNAL_CACHE_LOCK_TIMEOUT",
        Category::Internal,
        500,
        "Internal cache lock timeout",
        "The cache lock operation timed out. Contact Vercel support.",
        "Service temporarily unavailable. Please try again later or contact support.",
    )
    .not_actionable()
    .contact_support(),
    ErrorDescriptor::new(
        "INTERNAL_DEPLOYMENT_FETCH_FAILED",
        Category::Internal,
        500,
        "Internal deployment fetch failed",
        "Failed to fetch deployment internally. Contact Vercel support.",
        "A server error occurred. Please contact support.",
    )
    .not_actionable()
    .contact_support(),
    ErrorDescriptor::new(
        "INTERNAL_EDGE_FUNCTION_INVOCATION_FAILED",
        Category::Internal,
        500,
        "Internal edge function invocation failed",
        "Internal edge function error. Contact Vercel support.",
        "A server error occurred. Please contact support.",
    )
    .not_actionable()
    .contact_support(),
    ErrorDescriptor::new(
        "INTERNAL_EDGE_FUNCTION_INVOCATION_TIMEOUT",
        Category::Internal,
        500,
        "Internal edge function invocation timeout",
        "Internal edge function timeout. Contact Vercel support.",
        "A server error occurred. Please contact support.",
    )
    .not_actionable()
    .contact_support(),
    ErrorDescriptor::new(
        "INTERNAL_FUNCTION_INVOCATION_FAILED",
        Category::Internal,
        500,
        "Internal function invocation failed",
        "Internal function error. Contact Vercel support.",
        "A server error occurred. Please contact support.",
    )
    .not_actionable()
    .contact_support(),
    ErrorDescriptor::new(
        "INTERNAL_FUNCTION_INVOCATION_TIMEOUT",
        Category::Internal,
        500,
        "Internal function invocation timeout",
        "Internal function timeout. Contact Vercel support.",
        "A server error occurred. Please contact support.",
    )
    .not_actionable()
    .contact_support(),
    ErrorDescriptor::new(
        "INTERNAL_FUNCTION_NOT_FOUND",
        Category::Internal,
        500,
        "Internal function not found",
        "Internal function could not be found. Contact Vercel support.",
        "A server error occurred. Please contact support.",
    )
    .not_actionable()
    .contact_support(),
    ErrorDescriptor::new(
        "INTERNAL_FUNCTION_NOT_READY",
        Category::Internal,
        500,
        "Internal function not ready",
        "Internal function is not ready. Contact Vercel support.",
        "Service temporarily unavailable. Please try again later or contact support.",
    )
    .not_actionable()
    .contact_support(),
    ErrorDescriptor::new(
        "INTERNAL_FUNCTION_SERVICE_UNAVAILABLE",
        Category::Internal,
        500,
        "Internal function service unavailable",
        "Internal function service is unavailable. Contact Vercel support.",
        "Service temporarily unavailable. Please try again later or contact support.",
    )
    .not_actionable()
    .contact_support(),
    ErrorDescriptor::new(
        "INTERNAL_MICROFRONTENDS_BUILD_ERROR",
        Category::Internal,
        500,
        "Internal microfrontends build error",
        "Internal microfrontends build error. Contact Vercel support.",
        "A server error occurred. Please contact support.",
    )
    .not_actionable()
    .contact_support(),
    ErrorDescriptor::new(
        "INTERNAL_MICROFRONTENDS_INVALID_CONFIGURATION_ERROR",
        Category::Internal,
        500,
        "Internal microfrontends configuration error",
        "Internal microfrontends configuration error. Contact Vercel support.",
        "A server error occurred. Please contact support.",
    )
    .not_actionable()
    .contact_support(),
    ErrorDescriptor::new(
        "INTERNAL_MICROFRONTENDS_UNEXPECTED_ERROR",
        Category::Internal,
        500,
        "Internal microfrontends unexpected error",
        "Unexpected internal microfrontends error. Contact Vercel support.",
        "A server error occurred. Please contact support.",
    )
    .not_actionable()
    .contact_support(),
    ErrorDescriptor::new(
        "INTERNAL_MISSING_RESPONSE_FROM_CACHE",
        Category::Internal,
        500,
        "Internal missing response from cache",
        "Internal cache response missing. Contact Vercel support.",
        "A server error occurred. Please contact support.",
    )
    .not_actionable()
    .contact_support(),
    ErrorDescriptor::new(
        "INTERNAL_OPTIMIZED_IMAGE_REQUEST_FAILED",
        Category::Internal,
        500,
        "Internal optimized image request failed",
        "Internal image optimization error. Contact Vercel support.",
        "A server error occurred. Please contact support.",
    )
    .not_actionable()
    .contact_support(),
    ErrorDescriptor::new(
        "INTERNAL_ROUTER_CANNOT_PARSE_PATH",
        Category::Internal,
        500,
        "Internal router cannot parse path",
        "Internal routing error. Contact Vercel support.",
        "A server error occurred. Please contact support.",
    )
    .not_actionable()
    .contact_support(),
    ErrorDescriptor::new(
        "INTERNAL_STATIC_REQUEST_FAILED",
        Category::Internal,
        500,
        "Internal static request failed",
        "Internal static file serving error. Contact Vercel support.",
        "A server error occurred. Please contact support.",
    )
    .not_actionable()
    .contact_support(),
    ErrorDescriptor::new(
        "INTERNAL_UNARCHIVE_FAILED",
        Category::Internal,
        500,
        "Internal unarchive failed",
        "Internal archive extraction error. Contact Vercel support.",
        "A server error occurred. Please contact support.",
    )
    .not_actionable()
    .contact_support(),
    ErrorDescriptor::new(
        "INTERNAL_UNEXPECTED_ERROR",
        Category::Internal,
        500,
        "Internal unexpected error",
        "An unexpected internal error occurred. Contact Vercel support.",
        "An unexpected error occurred. Please contact support.",
    )
    .not_actionable()
    .contact_support(),
];
