//! GraphQL documents sent to the auction endpoint.
//!
//! These are the server's request contracts; responses are read loosely.

macro_rules! picture_fields {
    () => {
        "
    description
    fullSizeLocation
    height
    hdThumbnailLocation
    thumbnailLocation
    width
    __typename"
    };
}

macro_rules! link_fields {
    () => {
        "
    description
    id
    type
    url
    videoId
    __typename"
    };
}

macro_rules! auctioneer_fragment {
    () => {
        "
fragment auctioneer on Auctioneer {
  address
  bidIncrementDisclaimer
  buyerRegNotesCaption
  city
  countryId
  country
  cRMID
  email
  fax
  id
  internetAddress
  missingThumbnail
  name
  noMinimumCaption
  phone
  state
  postalCode
  __typename
}
"
    };
}

macro_rules! auction_fields {
    () => {
        concat!(
            "
  id
  altBiddingUrl
  altBiddingUrlCaption
  amexAccepted
  discoverAccepted
  mastercardAccepted
  visaAccepted
  regType
  holdAmount
  auctioneer {
    ...auctioneer
    __typename
  }
  auctionOptions {
    bidding
    altBidding
    catalog
    liveCatalog
    shippingType
    preview
    registration
    webcast
    useLotNumber
    useSaleOrder
    __typename
  }
  auctionState {
    auctionStatus
    bidCardNumber
    isRegistered
    openLotCount
    timeToOpen
    __typename
  }
  bidAmountType
  bidIncrements {
    minBidIncrement
    upToAmount
    __typename
  }
  bidOpenDateTime
  bidCloseDateTime
  bidType
  buyerPremium
  buyerPremiumRate
  checkoutDateInfo
  previewDateInfo
  currencyAbbreviation
  description
  eventAddress
  eventCity
  eventDateBegin
  eventDateEnd
  eventDateInfo
  eventName
  eventState
  eventZip
  featuredPicture {",
            picture_fields!(),
            "
  }
  links {",
            link_fields!(),
            "
  }
  lotCount
  showBuyerPremium
  audioVideoChatInfo {
    aVCEnabled
    blockChat
    __typename
  }
  hidden
  sourceType
  distanceMiles
  __typename"
        )
    };
}

macro_rules! lot_state_fields {
    () => {
        "
    bidCount
    biddingExtended
    bidMax
    bidMaxTotal
    buyerBidStatus
    buyerHighBid
    buyerHighBidTotal
    buyNow
    choiceType
    highBid
    highBuyerId
    isArchived
    isClosed
    isHidden
    isLive
    isNotYetLive
    isOnLiveCatalog
    isPosted
    isPublicHidden
    isRegistered
    isWatching
    linkedSoftClose
    mayHaveWonStatus
    minBid
    priceRealized
    priceRealizedMessage
    priceRealizedPerEach
    productStatus
    productUrl
    quantitySold
    reserveSatisfied
    sealed
    showBidStatus
    showReserveStatus
    softCloseMinutes
    softCloseSeconds
    status
    timeLeft
    timeLeftLead
    timeLeftSeconds
    timeLeftTitle
    timeLeftWithLimboSeconds
    watchNotes
    __typename"
    };
}

macro_rules! lot_fields {
    () => {
        concat!(
            "
    bidAmount
    bidList
    bidQuantity
    description
    estimate
    featuredPicture {",
            picture_fields!(),
            "
    }
    forceLiveCatalog
    fr8StarUrl
    hideLeadWithDescription
    id
    itemId
    lead
    links {",
            link_fields!(),
            "
    }
    linkTypes
    lotNumber
    lotState {",
            lot_state_fields!(),
            "
    }
    pictureCount
    quantity
    ringNumber
    rv
    shippingOffered
    simulcastStatus
    site {
      domain
      fr8StarUrl
      isDomainRequest
      isExtraWWWRequest
      siteType
      subdomain
      __typename
    }
    __typename"
        )
    };
}

macro_rules! auction_full_fields {
    () => {
        concat!(
            "
  id
  altBiddingUrl
  altBiddingUrlCaption
  amexAccepted
  discoverAccepted
  mastercardAccepted
  visaAccepted
  regType
  holdAmount
  auctioneer {
    ...auctioneer
    __typename
  }
  auctionNotice
  auctionOptions {
    bidding
    altBidding
    catalog
    liveCatalog
    shippingType
    preview
    registration
    webcast
    useLotNumber
    useSaleOrder
    __typename
  }
  auctionState {
    auctionStatus
    bidCardNumber
    isRegistered
    openLotCount
    timeToOpen
    __typename
  }
  bidAmountType
  biddingNotice
  bidIncrements {
    minBidIncrement
    upToAmount
    __typename
  }
  bidOpenDateTime
  bidCloseDateTime
  bidType
  buyerPremium
  buyerPremiumRate
  checkoutDateInfo
  previewDateInfo
  currencyAbbreviation
  description
  eventAddress
  eventCity
  eventDateBegin
  eventDateEnd
  eventDateInfo
  eventName
  eventState
  eventZip
  featuredPicture {",
            picture_fields!(),
            "
  }
  links {",
            link_fields!(),
            "
  }
  lotCount
  showBuyerPremium
  audioVideoChatInfo {
    aVCEnabled
    blockChat
    __typename
  }
  shippingAndPickupInfo
  paymentInfo
  hidden
  sourceType
  distanceMiles
  __typename"
        )
    };
}

// Lot detail for current bids; lot state is pulled in through the `lotState` fragment.
macro_rules! lot_only_fields {
    () => {
        concat!(
            "
  bidAmount
  bidList
  bidQuantity
  description
  estimate
  featuredPicture {",
            picture_fields!(),
            "
  }
  forceLiveCatalog
  fr8StarUrl
  hideLeadWithDescription
  id
  itemId
  lead
  links {",
            link_fields!(),
            "
  }
  linkTypes
  lotNavigator {
    lotCount
    lotPosition
    nextId
    previousId
    __typename
  }
  lotNumber
  lotState {
    ...lotState
    __typename
  }
  pictureCount
  pictures {",
            picture_fields!(),
            "
  }
  quantity
  ringNumber
  rv
  category {
    baseCategoryId
    categoryName
    description
    fullCategory
    header
    id
    parentCategoryId
    uRLPath
    __typename
  }
  shippingOffered
  simulcastStatus
  site {
    domain
    fr8StarUrl
    isDomainRequest
    isExtraWWWRequest
    siteType
    subdomain
    __typename
  }
  saleOrder
  __typename"
        )
    };
}

/// Operation name of the bid mutation.
pub const LOT_BID_OPERATION: &str = "LotBid";

/// Places a bid on a lot.
pub const LOT_BID: &str = "
mutation LotBid($lotId: Int!, $bidAmount: Decimal!, $reConfirmed: Boolean!) {
  bid(input: { lotId: $lotId, bidAmount: $bidAmount, reConfirmed: $reConfirmed }) {
    __typename
    ... on BidResultType {
      bidStatus
      suggestedBid
      bidMessage
      lot {
        ...lotFull
        __typename
      }
      __typename
    }
    ...InvalidInputErrors
  }
}

fragment lotFull on Lot {
  id
  description
}

fragment InvalidInputErrors on InvalidInputError {
  messages
  errors {
    fieldName
    messages
  }
}
";

/// Operation name of the current-bids query.
pub const CURRENT_BIDS_OPERATION: &str = "CurrentBidsSearch";

/// The caller's active bids, grouped by auction, with full lot detail.
pub const CURRENT_BIDS_SEARCH: &str = concat!(
    "
query CurrentBidsSearch(
  $isArchived: Boolean = false,
  $groupByAuction: Boolean = true,
  $auctionSortDirection: SortDirection = ASC,
  $hideClosedLots: Boolean = false,
  $pageNumber: Int!,
  $pageLength: Int!,
  $auctionId: Int = null,
  $buyerLotStatusGroup: BuyerLotStatusGroup = null,
  $sortOrder: BuyerEventItemSortOrder = null,
  $monthRange: AltBidPastBidsRange = null,
  $sortDirection: SortDirection = DESC
) {
  currentBids(
    input: {
      isArchived: $isArchived,
      groupByAuction: $groupByAuction,
      auctionSortDirection: $auctionSortDirection,
      hideClosedLots: $hideClosedLots,
      auctionId: $auctionId,
      buyerLotStatusGroup: $buyerLotStatusGroup,
      sortOrder: $sortOrder,
      monthRange: $monthRange
    },
    pageNumber: $pageNumber,
    pageLength: $pageLength,
    sortDirection: $sortDirection
  ) {
    auctions {
      ...auction
      __typename
    }
    pagedResults {
      pageLength
      pageNumber
      totalCount
      filteredCount
      results {
        ...lotFull
        __typename
      }
      __typename
    }
    __typename
  }
}

fragment auction on Auction {",
    auction_full_fields!(),
    "
}
",
    auctioneer_fragment!(),
    "
fragment lotFull on Lot {
  auction {
    ...auction
    __typename
  }
  ...lotOnly
  __typename
}

fragment lotOnly on Lot {",
    lot_only_fields!(),
    "
}

fragment lotState on LotState {",
    lot_state_fields!(),
    "
}
"
);

/// Operation name of the lot search query.
pub const LOT_SEARCH_OPERATION: &str = "LotSearch";

/// One page of lots matching filters within an auction.
pub const LOT_SEARCH: &str = concat!(
    "
query LotSearch($auctionId: Int = null, $pageNumber: Int!, $pageLength: Int!, $category: CategoryId = null, $searchText: String = null, $zip: String = null, $miles: Int = null, $shippingOffered: Boolean = false, $countryName: String = null, $status: AuctionLotStatus = null, $sortOrder: EventItemSortOrder = null, $filter: AuctionLotFilter = null, $isArchive: Boolean = false, $dateStart: DateTime, $dateEnd: DateTime, $countAsView: Boolean = true, $hideGoogle: Boolean = false) {
  lotSearch(
    input: {auctionId: $auctionId, category: $category, searchText: $searchText, zip: $zip, miles: $miles, shippingOffered: $shippingOffered, countryName: $countryName, status: $status, sortOrder: $sortOrder, filter: $filter, isArchive: $isArchive, dateStart: $dateStart, dateEnd: $dateEnd, countAsView: $countAsView, hideGoogle: $hideGoogle}
    pageNumber: $pageNumber
    pageLength: $pageLength
    sortDirection: DESC
  ) {
    pagedResults {
      pageLength
      pageNumber
      totalCount
      filteredCount
      results {
        auction {
          ...auctionMinimum
          __typename
        }",
    lot_fields!(),
    "
        distanceMiles
      }
      __typename
    }
    __typename
  }
}

fragment auctionMinimum on Auction {",
    auction_fields!(),
    "
}
",
    auctioneer_fragment!()
);
